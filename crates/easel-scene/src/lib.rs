//! Compositional 2D scene-graph with negotiated layout
//!
//! Shapes declare geometry as fixed or soft scalars; containers probe their
//! children's natural areas and commit final ones through the adjustment
//! protocol from `easel-geometry`. Rendering, input hardware and font
//! loading stay behind the `Surface`/`InputHardware`/`FontMetrics` seams.

mod color;
pub mod event;
mod input;
pub mod layout;
mod scene;
mod shape;
pub mod shapes;
mod surface;
pub mod widgets;

pub use color::*;
pub use event::*;
pub use input::*;
pub use layout::*;
pub use scene::*;
pub use shape::*;
pub use shapes::*;
pub use surface::*;
pub use widgets::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::event::{Event, KeyPress, Press, PressRelease, Release};
    pub use crate::input::{InputHardware, Key};
    pub use crate::layout::{Column, Grid, Margin, Padded, Row};
    pub use crate::scene::Scene;
    pub use crate::shape::{EmptyShape, Shape};
    pub use crate::shapes::{Group, Image, Line, Oval, Rect, Text};
    pub use crate::surface::{FontMetrics, ImageHandle, Surface};
    pub use crate::widgets::{
        Button, ButtonConfig, DualShape, Labeled, ListView, TextButton, TextField, Visible,
        VisibilityFlag,
    };
    pub use easel_geometry::prelude::*;
}
