//! Audio output capability and its rodio implementation.
//!
//! The playback controller only talks to [`AudioOutput`]; `RodioOutput`
//! plays through the default output device.

mod output;
mod resolver;
mod rodio_output;
mod sink;

pub use output::{AudioOutput, OutputError};
pub use resolver::ResourceResolver;
pub use rodio_output::RodioOutput;

#[cfg(test)]
pub(crate) mod mock;
