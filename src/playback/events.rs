use std::time::Duration;

use crate::library::Track;

use super::session::PlaybackStatus;

/// Change notifications published by the controller to its subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// A load succeeded; position is back at zero.
    TrackChanged {
        index: usize,
        track: Track,
        duration: Duration,
    },
    StatusChanged(PlaybackStatus),
    PositionChanged(Duration),
    /// A load failed and the session stayed where it was.
    LoadFailed { title: String, message: String },
}
