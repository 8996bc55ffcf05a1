//! Playback controller: the playlist, the session state and the audio output
//! it drives.

mod controller;
mod events;
mod session;

pub use controller::{LoadError, PlaybackController};
pub use events::PlaybackEvent;
pub use session::{PlaybackSession, PlaybackStatus};
