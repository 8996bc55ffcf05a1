use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("audio resource not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode {}: {reason}", path.display())]
    Undecodable { path: PathBuf, reason: String },
    #[error("audio device error: {0}")]
    Device(String),
}

/// Host audio capability driven by the playback controller.
///
/// Every call returns promptly; an implementation that decodes slowly does so
/// off the caller's thread.
pub trait AudioOutput {
    /// Prepare `resource_id` for playback, paused at the start.
    ///
    /// Returns the resource's duration. On error the previously loaded
    /// resource, if any, stays loaded.
    fn load(&mut self, resource_id: &str) -> Result<Duration, OutputError>;

    fn play(&mut self);

    fn pause(&mut self);

    /// Halt playback and rewind to the start of the loaded resource.
    fn stop(&mut self);

    /// Move to `position`. While paused or stopped it takes effect on the next `play`.
    fn seek(&mut self, position: Duration);

    fn current_position(&self) -> Duration;

    /// Release the output before exit, fading out over `fade` where supported.
    fn shutdown(&mut self, _fade: Duration) {
        self.stop();
    }
}
