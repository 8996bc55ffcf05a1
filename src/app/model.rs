use std::time::Duration;

use crate::library::Track;
use crate::playback::{PlaybackEvent, PlaybackSession};

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    /// Last known controller session, kept current by [`App::apply`].
    pub session: PlaybackSession,
    /// Non-fatal message shown under the transport controls.
    pub notification: Option<String>,
    pub current_dir: Option<String>,
}

impl App {
    pub fn new(tracks: Vec<Track>, session: PlaybackSession) -> Self {
        Self {
            tracks,
            session,
            notification: None,
            current_dir: None,
        }
    }

    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
    }

    /// Fold one controller event into the mirrored session.
    pub fn apply(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::TrackChanged {
                index,
                track,
                duration,
            } => {
                self.session.index = index;
                self.session.track = track;
                self.session.duration = duration;
                self.session.position = Duration::ZERO;
                self.session.loaded = true;
                self.notification = None;
            }
            PlaybackEvent::StatusChanged(status) => {
                self.session.status = status;
            }
            PlaybackEvent::PositionChanged(position) => {
                self.session.position = position;
            }
            PlaybackEvent::LoadFailed { title, message } => {
                self.notify(format!("Could not load \"{title}\": {message}"));
            }
        }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.session.index == index
    }
}
