//! Committed-geometry capture

use easel_geometry::{Adjustment, Area};
use easel_scene::{InputHardware, Shape, Surface};
use std::cell::Cell;
use std::rc::Rc;

/// A shape that mirrors every committed area into a shared cell, so layout
/// tests can observe where a container put it after it has been moved into
/// the container.
pub struct TrackedShape {
    area: Area,
    committed: Rc<Cell<Area>>,
}

impl TrackedShape {
    pub fn new(area: Area) -> Self {
        Self {
            area,
            committed: Rc::new(Cell::new(Area::default())),
        }
    }

    /// Shared handle to the last committed area.
    pub fn committed(&self) -> Rc<Cell<Area>> {
        Rc::clone(&self.committed)
    }
}

impl Shape for TrackedShape {
    fn draw(&self, _surface: &mut dyn Surface) {}

    fn register(&self, _hardware: &mut dyn InputHardware) {}

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        if adjustment.is_probe() {
            return self.area.natural();
        }
        self.area = self.area.adjusted(adjustment);
        self.committed.set(self.area);
        self.area
    }
}
