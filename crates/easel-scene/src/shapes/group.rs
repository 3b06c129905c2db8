//! Overlay of shapes sharing one slot

use crate::{InputHardware, Shape, Surface};
use easel_geometry::{covered, Adjustment, Area, NoAdjustment, Scalar, Size};
use smallvec::SmallVec;

/// Overlays its children instead of stacking them: every child receives the
/// same adjustment, so they all occupy the group's slot.
///
/// The natural area is the cover of the children's naturals; its extent is
/// fixed per axis only when every child is fixed on that axis, since a
/// single soft child makes the whole overlay stretchable.
#[derive(Default)]
pub struct Group {
    children: Vec<Box<dyn Shape>>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Shape + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn children(mut self, children: Vec<Box<dyn Shape>>) -> Self {
        self.children.extend(children);
        self
    }

    fn natural_area(&mut self) -> Area {
        let mut naturals: SmallVec<[Area; 8]> = SmallVec::with_capacity(self.children.len());
        for child in &mut self.children {
            naturals.push(child.adjustment(&NoAdjustment));
        }
        if naturals.is_empty() {
            return Area::default();
        }
        let cover = covered(&naturals);
        let width = if naturals.iter().all(|area| area.size.width.is_fix()) {
            Scalar::fix(cover.width())
        } else {
            Scalar::soft(cover.width())
        };
        let height = if naturals.iter().all(|area| area.size.height.is_fix()) {
            Scalar::fix(cover.height())
        } else {
            Scalar::soft(cover.height())
        };
        Area::new(cover.pos, Size::new(width, height))
    }
}

impl Shape for Group {
    fn draw(&self, surface: &mut dyn Surface) {
        for child in &self.children {
            child.draw(surface);
        }
    }

    fn register(&self, hardware: &mut dyn InputHardware) {
        for child in &self.children {
            child.register(hardware);
        }
    }

    fn adjustment(&mut self, adjustment: &dyn Adjustment) -> Area {
        if adjustment.is_probe() {
            return self.natural_area();
        }
        let mut committed: SmallVec<[Area; 8]> = SmallVec::with_capacity(self.children.len());
        for child in &mut self.children {
            committed.push(child.adjustment(adjustment));
        }
        covered(&committed)
    }
}
