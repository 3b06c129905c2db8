//! Deterministic text measurement

use easel_scene::FontMetrics;

/// Metrics where every glyph occupies one cell: width is the char count
/// times `cell_width`, height is `cell_height`, regardless of font size.
#[derive(Clone, Copy, Debug)]
pub struct CharCellMetrics {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl CharCellMetrics {
    pub const fn new(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }
}

impl Default for CharCellMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl FontMetrics for CharCellMetrics {
    fn measure(&self, text: &str, _font_size: f32) -> (f32, f32) {
        (
            text.chars().count() as f32 * self.cell_width,
            self.cell_height,
        )
    }
}
