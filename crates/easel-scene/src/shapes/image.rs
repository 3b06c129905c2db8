//! Decoded images placed by the layout

use crate::{ImageHandle, InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area, Pos, Size};

/// An image at its intrinsic pixel size.
///
/// Decoding happens in the loader collaborator; the shape only carries the
/// handle. The natural size is the intrinsic extent, fixed; the position is
/// soft unless moved with [`at`](Self::at).
pub struct Image {
    handle: ImageHandle,
    area: Area,
}

impl Image {
    pub fn new(handle: ImageHandle) -> Self {
        Self {
            handle,
            area: Area::new(Pos::soft(0.0, 0.0), Size::fix(handle.width, handle.height)),
        }
    }

    /// Moves the declared origin.
    pub fn at(mut self, pos: Pos) -> Self {
        self.area.pos = pos;
        self
    }
}

impl Shape for Image {
    fn draw(&self, surface: &mut dyn Surface) {
        let area = self.area;
        surface.draw_image(self.handle, area.x(), area.y(), area.width(), area.height());
    }

    fn register(&self, _hardware: &mut dyn InputHardware) {}

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        if adjustment.is_probe() {
            return self.area.natural();
        }
        self.area = self.area.adjusted(adjustment);
        self.area
    }
}
