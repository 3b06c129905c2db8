//! Visibility gate

use crate::{InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area};
use std::cell::Cell;
use std::rc::Rc;

/// Shared visibility toggle. Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct VisibilityFlag(Rc<Cell<bool>>);

impl VisibilityFlag {
    pub fn new(visible: bool) -> Self {
        Self(Rc::new(Cell::new(visible)))
    }

    pub fn visible(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, visible: bool) {
        self.0.set(visible);
    }

    pub fn toggle(&self) {
        self.0.set(!self.0.get());
    }
}

impl Default for VisibilityFlag {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Gates a shape's `draw` and `register` on a [`VisibilityFlag`].
///
/// `adjustment` always goes through: a hidden shape keeps reserving its
/// slot, so toggling visibility never moves its siblings.
pub struct Visible {
    child: Box<dyn Shape>,
    flag: VisibilityFlag,
}

impl Visible {
    pub fn new(child: impl Shape + 'static) -> Self {
        Self::with_flag(child, VisibilityFlag::default())
    }

    pub fn with_flag(child: impl Shape + 'static, flag: VisibilityFlag) -> Self {
        Self {
            child: Box::new(child),
            flag,
        }
    }

    /// Another handle to the gate.
    pub fn flag(&self) -> VisibilityFlag {
        self.flag.clone()
    }
}

impl Shape for Visible {
    fn draw(&self, surface: &mut dyn Surface) {
        if self.flag.visible() {
            self.child.draw(surface);
        }
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        if self.flag.visible() {
            self.child.register(hardware);
        }
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        self.child.adjustment(adjustment)
    }
}
