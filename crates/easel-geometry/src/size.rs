//! Extents as pairs of negotiable scalars

use crate::{Adjustment, Axis, Scalar};

/// An extent. Each dimension carries its own fixed/soft tag; a soft
/// dimension is a hint the owning container may override during
/// distribution.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: Scalar,
    pub height: Scalar,
}

impl Size {
    pub const fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    /// A size with both dimensions fixed.
    pub const fn fix(width: f32, height: f32) -> Self {
        Self::new(Scalar::fix(width), Scalar::fix(height))
    }

    /// A size with both dimensions soft.
    pub const fn soft(width: f32, height: f32) -> Self {
        Self::new(Scalar::soft(width), Scalar::soft(height))
    }

    /// The extent lying on the main axis of `axis`.
    #[inline]
    pub fn along(self, axis: Axis) -> Scalar {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Snapshot with both committed values reset to the declared ones.
    pub fn natural(self) -> Self {
        Self::new(self.width.natural(), self.height.natural())
    }

    /// Applies the size half of `adjustment` to the declared pair and
    /// assigns the result through [`Scalar::adjust`], so fixed dimensions
    /// survive unchanged. A fully fixed size never consults the adjustment.
    pub fn adjusted(self, adjustment: &dyn Adjustment) -> Self {
        if self.width.is_fix() && self.height.is_fix() {
            return self;
        }
        let (width, height) = adjustment.size(self.width.clean(), self.height.clean());
        Self::new(self.width.adjust(|_| width), self.height.adjust(|_| height))
    }
}
