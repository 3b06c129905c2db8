//! Test doubles for the Easel seams
//!
//! A recording surface instead of a window backend, a scripted input
//! driver instead of real hardware, and char-cell font metrics so text
//! measurement is exact in assertions.

mod input;
mod metrics;
mod recording;
mod tracked;

pub use input::*;
pub use metrics::*;
pub use recording::*;
pub use tracked::*;
