//! Domain types for the demo schedule.

mod event;
mod month;
mod patient;

pub use event::*;
pub use month::*;
pub use patient::*;
