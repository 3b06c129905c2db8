//! Ellipses inscribed in an area

use crate::event::Event;
use crate::{Color, InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area};

/// A filled oval inscribed in its committed area.
pub struct Oval {
    area: Area,
    color: Color,
    event: Option<Box<dyn Event>>,
}

impl Oval {
    pub fn new(area: Area, color: Color) -> Self {
        Self {
            area,
            color,
            event: None,
        }
    }

    pub fn with_event(mut self, event: impl Event + 'static) -> Self {
        self.event = Some(Box::new(event));
        self
    }
}

impl Shape for Oval {
    fn draw(&self, surface: &mut dyn Surface) {
        let area = self.area;
        surface.fill_oval(area.x(), area.y(), area.width(), area.height(), self.color);
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
