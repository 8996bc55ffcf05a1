//! Application module: the state the UI renders.
//!
//! `App` mirrors the controller's session from the events it publishes and
//! keeps the few bits of state that are purely presentational.

mod model;

pub use model::*;
