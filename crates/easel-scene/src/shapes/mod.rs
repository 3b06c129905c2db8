//! Leaf shapes and the overlay group

mod group;
mod image;
mod line;
mod oval;
mod rect;
mod text;

pub use group::*;
pub use image::*;
pub use line::*;
pub use oval::*;
pub use rect::*;
pub use text::*;
