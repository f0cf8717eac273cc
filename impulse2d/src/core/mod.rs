//! Core module has the shared numeric traits, math types and the event dispatcher.
pub mod event;
pub mod math;
pub mod traits;
