//! Textual lists

use super::{Labeled, Visible, VisibilityFlag};
use crate::event::Press;
use crate::layout::Column;
use crate::shapes::{Rect, Text};
use crate::{Color, FontMetrics, InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area};

/// A column of labeled entries. Pressing an entry toggles its background,
/// leaving the label and the slot in place.
pub struct ListView {
    column: Column,
}

impl ListView {
    pub fn new(entries: &[&str], metrics: &dyn FontMetrics) -> Self {
        Self::assemble(Column::new(), entries, metrics)
    }

    /// A list with a declared area.
    pub fn with_area(area: Area, entries: &[&str], metrics: &dyn FontMetrics) -> Self {
        Self::assemble(Column::with_area(area), entries, metrics)
    }

    fn assemble(mut column: Column, entries: &[&str], metrics: &dyn FontMetrics) -> Self {
        for entry in entries {
            let flag = VisibilityFlag::default();
            let toggle = flag.clone();
            let background = Rect::colored(Area::default(), Color::rgb(130, 130, 130))
                .with_event(Press::new(move || toggle.toggle()));
            column = column.child(Labeled::new(
                Visible::with_flag(background, flag),
                Text::new(*entry, metrics),
            ));
        }
        Self { column }
    }
}

impl Shape for ListView {
    fn draw(&self, surface: &mut dyn Surface) {
        self.column.draw(surface);
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        self.column.register(hardware);
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        self.column.adjustment(adjustment)
    }
}
