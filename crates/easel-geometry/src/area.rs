//! Area snapshots produced by the negotiation

use crate::{Adjustment, Pos, Size};

/// A position plus an extent.
///
/// Areas are value snapshots: a shape holds one as internal state and hands
/// out copies from its `adjustment` calls, so no two shapes ever alias
/// geometry.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Area {
    pub pos: Pos,
    pub size: Size,
}

impl Area {
    pub const fn new(pos: Pos, size: Size) -> Self {
        Self { pos, size }
    }

    /// An area fixed in both position and extent.
    pub const fn fix(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Pos::fix(x, y), Size::fix(width, height))
    }

    /// An area that is entirely a hint.
    pub const fn soft(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Pos::soft(x, y), Size::soft(width, height))
    }

    /// Soft origin plus the given size: the usual declaration for a shape
    /// that knows how big it is but not where it goes.
    pub const fn from_size(size: Size) -> Self {
        Self::new(Pos::soft(0.0, 0.0), size)
    }

    /// Committed left edge.
    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x.value()
    }

    /// Committed top edge.
    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y.value()
    }

    /// Committed width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width.value()
    }

    /// Committed height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height.value()
    }

    /// Probe snapshot: committed values reset to the declared ones.
    pub fn natural(&self) -> Self {
        Self::new(self.pos.natural(), self.size.natural())
    }

    /// Applies `adjustment` to the declared values of both pairs; fixed
    /// scalars survive unchanged.
    pub fn adjusted(&self, adjustment: &dyn Adjustment) -> Self {
        Self::new(self.pos.adjusted(adjustment), self.size.adjusted(adjustment))
    }

    /// Hit test against the committed values.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x() && y >= self.y() && x <= self.x() + self.width() && y <= self.y() + self.height()
    }
}

#[cfg(test)]
#[path = "tests/area_tests.rs"]
mod tests;
