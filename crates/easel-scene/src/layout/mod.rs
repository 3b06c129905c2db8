//! Containers running the distribution pass

mod grid;
mod linear;
mod padded;

pub use grid::*;
pub use linear::*;
pub use padded::*;
