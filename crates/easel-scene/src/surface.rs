//! Rendering seams implemented by out-of-scope collaborators

use crate::Color;

/// The drawing target shapes paint their committed state onto.
///
/// Implementations live outside this crate (a window backend, or the
/// recording double from `easel-testing`). All coordinates are committed
/// values; shapes never do layout work inside a draw call.
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn outline_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_oval(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color);
    /// Paints `text` with its baseline at `baseline`.
    fn draw_string(&mut self, text: &str, x: f32, baseline: f32, font_size: f32, color: Color);
    fn draw_image(&mut self, image: ImageHandle, x: f32, y: f32, width: f32, height: f32);
    /// Restricts subsequent paints to the given rectangle until
    /// [`clear_clip`](Self::clear_clip).
    fn set_clip(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn clear_clip(&mut self);
}

/// Text measurement seam.
///
/// Collaborators may legitimately return zero extents (a font that failed to
/// load); the layout pass tolerates that.
pub trait FontMetrics {
    /// Returns the `(width, height)` footprint of `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f32) -> (f32, f32);
}

/// Handle to an image decoded by the loader collaborator, together with its
/// intrinsic pixel extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageHandle {
    pub id: u64,
    pub width: f32,
    pub height: f32,
}

impl ImageHandle {
    pub const fn new(id: u64, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}
