//! Host shape with a text overlay

use crate::shapes::Text;
use crate::{InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area, FnAdjustment};

/// A shape with a text placed at its committed origin.
///
/// The host alone is what the layout sees and what receives events; the
/// label tags along after the host commits.
pub struct Labeled {
    host: Box<dyn Shape>,
    label: Text,
}

impl Labeled {
    pub fn new(host: impl Shape + 'static, label: Text) -> Self {
        Self {
            host: Box::new(host),
            label,
        }
    }
}

impl Shape for Labeled {
    fn draw(&self, surface: &mut dyn Surface) {
        self.host.draw(surface);
        self.label.draw(surface);
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        self.host.register(hardware);
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        if adjustment.is_probe() {
            return self.host.adjustment(adjustment);
        }
        let committed = self.host.adjustment(adjustment);
        let (x, y) = (committed.x(), committed.y());
        self.label.adjustment(&FnAdjustment::new(
            move |_, _| (x, y),
            |width, height| (width, height),
        ));
        committed
    }
}
