//! Event bindings attached to shapes

mod key;
mod mouse;

pub use key::*;
pub use mouse::*;

use crate::InputHardware;
use easel_geometry::Area;

/// Something a shape can bind to input hardware.
///
/// `area` is the committed snapshot the shape holds at registration time;
/// mouse events capture it for hit testing, keyboard events ignore it.
pub trait Event {
    fn register(&self, hardware: &mut dyn InputHardware, area: Area);
}
