//! Two-faced shapes

use crate::{InputHardware, Shape, Surface};
use easel_geometry::{Adjustment, Area};
use std::cell::Cell;
use std::rc::Rc;

/// Which face a [`DualShape`] currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    First,
    Second,
}

impl Face {
    pub fn flipped(self) -> Self {
        match self {
            Face::First => Face::Second,
            Face::Second => Face::First,
        }
    }
}

/// Shared selector for a [`DualShape`]'s face. Clones observe the same
/// selection, which is how an event closure flips a shape it doesn't own.
#[derive(Clone, Debug, Default)]
pub struct FaceHandle(Rc<Cell<Face>>);

impl FaceHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Face {
        self.0.get()
    }

    pub fn set(&self, face: Face) {
        self.0.set(face);
    }

    pub fn toggle(&self) {
        self.0.set(self.0.get().flipped());
    }
}

/// A shape that switches between two faces.
///
/// Only the current face draws and registers, but *both* faces receive
/// every adjustment, so the hidden one stays congruent and a toggle never
/// needs a relayout.
pub struct DualShape {
    first: Box<dyn Shape>,
    second: Box<dyn Shape>,
    handle: FaceHandle,
}

impl DualShape {
    pub fn new(
        first: impl Shape + 'static,
        second: impl Shape + 'static,
        handle: FaceHandle,
    ) -> Self {
        Self {
            first: Box::new(first),
            second: Box::new(second),
            handle,
        }
    }

    /// Another handle to the face selector.
    pub fn handle(&self) -> FaceHandle {
        self.handle.clone()
    }
}

impl Shape for DualShape {
    fn draw(&self, surface: &mut dyn Surface) {
        match self.handle.current() {
            Face::First => self.first.draw(surface),
            Face::Second => self.second.draw(surface),
        }
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        match self.handle.current() {
            Face::First => self.first.register(hardware),
            Face::Second => self.second.register(hardware),
        }
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        let first = self.first.adjustment(adjustment);
        let second = self.second.adjustment(adjustment);
        match self.handle.current() {
            Face::First => first,
            Face::Second => second,
        }
    }
}
