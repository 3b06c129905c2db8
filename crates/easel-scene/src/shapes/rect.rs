//! Rectangles, filled or outline

use crate::event::Event;
use crate::{Color, InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area};

/// A rectangle holding a committed area, a paint color and an optional
/// event bound against that area.
pub struct Rect {
    area: Area,
    color: Color,
    filled: bool,
    event: Option<Box<dyn Event>>,
}

impl Rect {
    /// A black filled rectangle.
    pub fn new(area: Area) -> Self {
        Self::colored(area, Color::BLACK)
    }

    /// A filled rectangle in the given color.
    pub fn colored(area: Area, color: Color) -> Self {
        Self {
            area,
            color,
            filled: true,
            event: None,
        }
    }

    /// An outline-only rectangle.
    pub fn outline(area: Area, color: Color) -> Self {
        Self {
            filled: false,
            ..Self::colored(area, color)
        }
    }

    /// Attaches an event. It registers against whatever area the last
    /// commit pass produced.
    pub fn with_event(mut self, event: impl Event + 'static) -> Self {
        self.event = Some(Box::new(event));
        self
    }

    /// The committed area of the last pass.
    pub fn area(&self) -> Area {
        self.area
    }
}

impl Shape for Rect {
    fn draw(&self, surface: &mut dyn Surface) {
        let area = self.area;
        if self.filled {
            surface.fill_rect(area.x(), area.y(), area.width(), area.height(), self.color);
        } else {
            surface.outline_rect(area.x(), area.y(), area.width(), area.height(), self.color);
        }
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        if let Some(event) = &self.event {
            event.register(hardware, self.area);
        }
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        if adjustment.is_probe() {
            return self.area.natural();
        }
        self.area = self.area.adjusted(adjustment);
        self.area
    }
}
