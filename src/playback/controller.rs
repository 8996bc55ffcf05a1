use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::audio::{AudioOutput, OutputError};
use crate::library::Playlist;

use super::events::PlaybackEvent;
use super::session::{PlaybackSession, PlaybackStatus};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no track at playlist index {0}")]
    UnknownIndex(usize),
    #[error("failed to load `{title}`: {source}")]
    Output {
        title: String,
        #[source]
        source: OutputError,
    },
}

/// Mediates between a playlist, the playback session and an audio output.
///
/// Every operation takes `&mut self`, so navigation never interleaves.
/// Calls that make no sense in the current state (pausing while stopped,
/// playing before anything is loaded) are ignored rather than reported.
pub struct PlaybackController<O: AudioOutput> {
    playlist: Playlist,
    session: PlaybackSession,
    output: O,
    subscribers: Vec<Sender<PlaybackEvent>>,
}

impl<O: AudioOutput> PlaybackController<O> {
    /// Start a session on the first playlist entry, stopped and not yet loaded.
    pub fn new(playlist: Playlist, output: O) -> Self {
        // `Playlist` is never empty.
        let first = playlist.tracks()[0].clone();
        Self {
            playlist,
            session: PlaybackSession::new(0, first),
            output,
            subscribers: Vec::new(),
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &O {
        &self.output
    }

    #[cfg(test)]
    pub(crate) fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Register an observer. Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<PlaybackEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.session.status != status {
            self.session.status = status;
            self.emit(PlaybackEvent::StatusChanged(status));
        }
    }

    fn set_position(&mut self, position: Duration) {
        if self.session.position != position {
            self.session.position = position;
            self.emit(PlaybackEvent::PositionChanged(position));
        }
    }

    /// Load the playlist entry at `index`, leaving it stopped at the start.
    ///
    /// On failure the session is left exactly as it was.
    pub fn load(&mut self, index: usize) -> Result<(), LoadError> {
        let Some(track) = self.playlist.get(index).cloned() else {
            return Err(LoadError::UnknownIndex(index));
        };

        match self.output.load(&track.resource_id) {
            Ok(duration) => {
                info!(index, title = %track.title, "track loaded");
                self.session.index = index;
                self.session.track = track.clone();
                self.session.duration = duration;
                self.session.position = Duration::ZERO;
                self.session.loaded = true;
                self.emit(PlaybackEvent::TrackChanged {
                    index,
                    track,
                    duration,
                });
                self.set_status(PlaybackStatus::Stopped);
                Ok(())
            }
            Err(source) => {
                warn!(index, title = %track.title, error = %source, "load failed");
                self.emit(PlaybackEvent::LoadFailed {
                    title: track.title.clone(),
                    message: source.to_string(),
                });
                Err(LoadError::Output {
                    title: track.title,
                    source,
                })
            }
        }
    }

    pub fn play(&mut self) {
        if !self.session.loaded {
            debug!("play ignored: nothing loaded");
            return;
        }
        if self.session.is_playing() {
            return;
        }
        self.output.play();
        self.set_status(PlaybackStatus::Playing);
    }

    pub fn pause(&mut self) {
        if !self.session.is_playing() {
            debug!(status = ?self.session.status, "pause ignored");
            return;
        }
        self.output.pause();
        self.set_status(PlaybackStatus::Paused);
    }

    /// Pause when playing, play otherwise.
    pub fn toggle(&mut self) {
        if self.session.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn stop(&mut self) {
        if self.session.loaded {
            self.output.stop();
        }
        self.set_position(Duration::ZERO);
        self.set_status(PlaybackStatus::Stopped);
    }

    /// Seek to `target_secs`, clamped into `[0, duration]`.
    pub fn seek(&mut self, target_secs: f64) {
        if !self.session.loaded {
            debug!("seek ignored: nothing loaded");
            return;
        }

        let duration = self.session.duration;
        let target = if target_secs.is_nan() || target_secs <= 0.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(target_secs.min(duration.as_secs_f64())).min(duration)
        };

        self.output.seek(target);
        self.set_position(target);
    }

    /// Seek relative to the current position.
    pub fn seek_by(&mut self, delta_secs: f64) {
        let target = self.session.position.as_secs_f64() + delta_secs;
        self.seek(target);
    }

    /// Refresh `position` from the output. Meant to be called periodically.
    pub fn tick(&mut self) {
        if !self.session.loaded {
            return;
        }
        let position = self.output.current_position().min(self.session.duration);
        self.set_position(position);
    }

    /// Advance to the next track, wrapping to the first.
    pub fn next(&mut self) -> Result<(), LoadError> {
        let target = self.playlist.next_index(self.session.index);
        self.switch_to(target)
    }

    /// Go back to the previous track, wrapping to the last.
    pub fn previous(&mut self) -> Result<(), LoadError> {
        let target = self.playlist.previous_index(self.session.index);
        self.switch_to(target)
    }

    /// Load `index` eagerly so the duration is accurate immediately, and
    /// keep playing if we were.
    fn switch_to(&mut self, index: usize) -> Result<(), LoadError> {
        let was_playing = self.session.is_playing();
        if was_playing {
            self.stop();
        }

        self.load(index)?;

        if was_playing {
            self.play();
        }
        Ok(())
    }

    /// Release the output before exit. Nothing plays afterwards.
    pub fn shutdown(&mut self, fade: Duration) {
        if self.session.loaded {
            self.output.shutdown(fade);
            self.session.loaded = false;
        }
        self.set_status(PlaybackStatus::Stopped);
    }
}
