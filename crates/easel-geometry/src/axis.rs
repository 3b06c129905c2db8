/// The main direction of a linear container.
///
/// The main axis is the one children are stacked along; the cross axis is
/// the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal main axis (`Row`): children stack left to right.
    Horizontal,
    /// Vertical main axis (`Column`): children stack top to bottom.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Selects the main-axis component of an `(x, y)` or `(width, height)`
    /// pair.
    #[inline]
    pub fn main_of(self, x: f32, y: f32) -> f32 {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }

    /// Selects the cross-axis component of an `(x, y)` or `(width, height)`
    /// pair.
    #[inline]
    pub fn cross_of(self, x: f32, y: f32) -> f32 {
        match self {
            Axis::Horizontal => y,
            Axis::Vertical => x,
        }
    }

    /// Recombines main- and cross-axis components into an `(x, y)` or
    /// `(width, height)` pair.
    #[inline]
    pub fn pack(self, main: f32, cross: f32) -> (f32, f32) {
        match self {
            Axis::Horizontal => (main, cross),
            Axis::Vertical => (cross, main),
        }
    }
}
