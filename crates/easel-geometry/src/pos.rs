//! Positions as pairs of negotiable scalars

use crate::{Adjustment, Axis, Scalar};

/// A position. Each coordinate carries its own fixed/soft tag, so a shape
/// can pin one component and leave the other to its container.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Pos {
    pub x: Scalar,
    pub y: Scalar,
}

impl Pos {
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// A position with both components fixed.
    pub const fn fix(x: f32, y: f32) -> Self {
        Self::new(Scalar::fix(x), Scalar::fix(y))
    }

    /// A position with both components soft.
    pub const fn soft(x: f32, y: f32) -> Self {
        Self::new(Scalar::soft(x), Scalar::soft(y))
    }

    /// The coordinate lying on the main axis of `axis`.
    #[inline]
    pub fn along(self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Snapshot with both committed values reset to the declared ones.
    pub fn natural(self) -> Self {
        Self::new(self.x.natural(), self.y.natural())
    }

    /// Applies the position half of `adjustment` to the declared pair and
    /// assigns the result through [`Scalar::adjust`], so fixed components
    /// survive unchanged. A fully fixed position never consults the
    /// adjustment.
    pub fn adjusted(self, adjustment: &dyn Adjustment) -> Self {
        if self.x.is_fix() && self.y.is_fix() {
            return self;
        }
        let (x, y) = adjustment.pos(self.x.clean(), self.y.clean());
        Self::new(self.x.adjust(|_| x), self.y.adjust(|_| y))
    }

    /// Moves the soft components by the given delta, relative to their
    /// declared values. Fixed components stay pinned.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x.adjust(|clean| clean + dx),
            self.y.adjust(|clean| clean + dy),
        )
    }
}
