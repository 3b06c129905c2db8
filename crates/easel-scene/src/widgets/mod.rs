//! Composite shapes built on the negotiation contract

mod button;
mod dual_shape;
mod labeled;
mod list_view;
mod text_button;
mod text_field;
mod visible;

pub use button::*;
pub use dual_shape::*;
pub use labeled::*;
pub use list_view::*;
pub use text_button::*;
pub use text_field::*;
pub use visible::*;
