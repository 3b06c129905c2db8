//! The polymorphic node contract

use crate::{InputHardware, Surface};
use easel_geometry::{Adjustment, Area};

/// A node of the scene tree.
///
/// The three operations split a node's life cleanly: `adjustment` is the
/// sole geometry negotiation entry point, `draw` paints whatever the last
/// commit produced, `register` binds events against that committed snapshot.
pub trait Shape {
    /// Paints committed state. Never does layout work.
    fn draw(&self, surface: &mut dyn Surface);

    /// Binds events against the current committed area. Meaningful only
    /// after at least one commit pass.
    fn register(&self, hardware: &mut dyn InputHardware);

    /// Negotiates geometry. A probe adjustment returns the natural area
    /// without touching state; a commit adjustment replaces the internal
    /// area with the adjusted result and returns it.
    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area;
}

/// A shape with no declared footprint and nothing to paint.
///
/// Its soft zero extent makes it a filler: inside a container it soaks up
/// an equal share of the remaining space.
#[derive(Debug, Default)]
pub struct EmptyShape {
    area: Area,
}

impl EmptyShape {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Shape for EmptyShape {
    fn draw(&self, _surface: &mut dyn Surface) {}

    fn register(&self, _hardware: &mut dyn InputHardware) {}

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        if adjustment.is_probe() {
            return self.area.natural();
        }
        self.area = self.area.adjusted(adjustment);
        self.area
    }
}
