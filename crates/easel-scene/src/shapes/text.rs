//! Text measured once, drawn at the committed origin

use crate::{Color, FontMetrics, InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area, Pos, Size};

pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// What a [`Text`] displays: a fixed string or a supplier read at every
/// draw (a text field buffer, a counter).
pub enum TextContent {
    Static(String),
    Supplier(Box<dyn Fn() -> String>),
}

impl TextContent {
    fn resolve(&self) -> String {
        match self {
            TextContent::Static(text) => text.clone(),
            TextContent::Supplier(supplier) => supplier(),
        }
    }
}

/// A piece of text.
///
/// The natural size is measured exactly once, at construction, and is
/// fixed; the position stays soft until a container commits it. Supplier
/// content may change afterwards without renegotiating layout, so overlong
/// text is the owner's problem (`TextField` clips for this reason).
pub struct Text {
    content: TextContent,
    font_size: f32,
    color: Color,
    area: Area,
}

impl Text {
    /// Black text at the default font size.
    pub fn new(content: impl Into<String>, metrics: &dyn FontMetrics) -> Self {
        Self::styled(
            TextContent::Static(content.into()),
            DEFAULT_FONT_SIZE,
            Color::BLACK,
            metrics,
        )
    }

    /// Text whose content is re-read from `supplier` at every draw. The
    /// footprint is still measured once, from the current value.
    pub fn supplied(supplier: impl Fn() -> String + 'static, metrics: &dyn FontMetrics) -> Self {
        Self::styled(
            TextContent::Supplier(Box::new(supplier)),
            DEFAULT_FONT_SIZE,
            Color::BLACK,
            metrics,
        )
    }

    pub fn styled(
        content: TextContent,
        font_size: f32,
        color: Color,
        metrics: &dyn FontMetrics,
    ) -> Self {
        let (width, height) = metrics.measure(&content.resolve(), font_size);
        Self {
            content,
            font_size,
            color,
            area: Area::new(Pos::soft(0.0, 0.0), Size::fix(width, height)),
        }
    }

    /// Moves the declared origin. Pass a fixed [`Pos`] to pin the text
    /// against container placement.
    pub fn at(mut self, pos: Pos) -> Self {
        self.area.pos = pos;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The committed area of the last pass.
    pub fn area(&self) -> Area {
        self.area
    }
}

impl Shape for Text {
    fn draw(&self, surface: &mut dyn Surface) {
        let area = self.area;
        surface.draw_string(
            &self.content.resolve(),
            area.x(),
            area.y() + area.height(),
            self.font_size,
            self.color,
        );
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
