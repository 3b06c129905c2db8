//! Geometry negotiation value model for Easel
//!
//! This crate carries the pure value side of the layout protocol: scalars
//! tagged fixed or soft, the position/extent pairs built from them, the
//! adjustments containers pass down the shape tree, and the `covered`
//! bounding-box reducer.

mod adjustment;
mod area;
mod axis;
mod covered;
mod pos;
mod scalar;
mod size;

pub use adjustment::*;
pub use area::*;
pub use axis::*;
pub use covered::*;
pub use pos::*;
pub use scalar::*;
pub use size::*;

pub mod prelude {
    pub use crate::adjustment::{Adjustment, FnAdjustment, NoAdjustment};
    pub use crate::area::Area;
    pub use crate::axis::Axis;
    pub use crate::covered::covered;
    pub use crate::pos::Pos;
    pub use crate::scalar::Scalar;
    pub use crate::size::Size;
}
