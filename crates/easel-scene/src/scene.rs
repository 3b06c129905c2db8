//! Root driver of the shape tree

use crate::{InputHardware, Shape, Surface};
use easel_geometry::{Area, FnAdjustment, NoAdjustment};

/// Owns the root shape and runs whole-tree passes.
///
/// The window layer calls [`layout`](Self::layout) once per redraw tick
/// and [`register`](Self::register) once after the first layout; both are
/// synchronous and always run to completion.
pub struct Scene {
    root: Box<dyn Shape>,
    committed: Option<Area>,
}

impl Scene {
    pub fn new(root: impl Shape + 'static) -> Self {
        Self {
            root: Box::new(root),
            committed: None,
        }
    }

    /// The root's natural area. What a window sizing itself to its content
    /// asks for.
    pub fn natural(&mut self) -> Area {
        self.root.adjustment(&NoAdjustment)
    }

    /// Commits the tree against the viewport: positions pass through, soft
    /// root size scalars take the viewport extent. Returns the committed
    /// root area.
    pub fn layout(&mut self, width: f32, height: f32) -> Area {
        log::debug!("layout pass for viewport {}x{}", width, height);
        let committed = self.root.adjustment(&FnAdjustment::new(
            |x, y| (x, y),
            move |_, _| (width, height),
        ));
        log::debug!(
            "root committed at ({}, {}) size {}x{}",
            committed.x(),
            committed.y(),
            committed.width(),
            committed.height()
        );
        self.committed = Some(committed);
        committed
    }

    /// The committed root area of the last layout pass, if one ran.
    pub fn committed(&self) -> Option<Area> {
        self.committed
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.root.draw(surface);
    }

    /// Binds the tree's events. Warns when no layout pass has run, since
    /// listeners would hit-test declared instead of committed geometry.
    pub fn register(&self, hardware: &mut dyn InputHardware) {
        if self.committed.is_none() {
            log::warn!("register before any layout pass; hit tests will use declared geometry");
        }
        self.root.register(hardware);
    }
}
