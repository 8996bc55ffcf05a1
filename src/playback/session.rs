use std::time::Duration;

use crate::library::Track;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Mutable run-time playback state, owned by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    /// Playlist index of `track`.
    pub index: usize,
    pub track: Track,
    pub status: PlaybackStatus,
    /// Zero until a load succeeds.
    pub duration: Duration,
    /// Always within `0..=duration`.
    pub position: Duration,
    /// Whether the audio output currently holds `track`.
    pub loaded: bool,
}

impl PlaybackSession {
    pub fn new(index: usize, track: Track) -> Self {
        Self {
            index,
            track,
            status: PlaybackStatus::Stopped,
            duration: Duration::ZERO,
            position: Duration::ZERO,
            loaded: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Fraction of the track played, for the scrubber.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.position.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}
