use std::path::PathBuf;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info, warn};

use super::output::{AudioOutput, OutputError};
use super::resolver::ResourceResolver;
use super::sink::{create_sink_at, fade_out_sink, open_decoder, probe_duration, sink_from};

struct Loaded {
    path: PathBuf,
    duration: Duration,
    sink: Sink,
    /// Where the current sink started; `Sink::get_pos` counts from there.
    offset: Duration,
    playing: bool,
}

/// [`AudioOutput`] backed by the default output device.
pub struct RodioOutput {
    stream: OutputStream,
    resolver: ResourceResolver,
    volume: f32,
    current: Option<Loaded>,
}

impl RodioOutput {
    pub fn open_default(resolver: ResourceResolver, volume: f32) -> Result<Self, OutputError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| OutputError::Device(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            resolver,
            volume: volume.clamp(0.0, 1.0),
            current: None,
        })
    }

    /// Replace the current sink with a fresh one starting at `position`,
    /// keeping the play/pause state. On failure the old sink stays in place.
    fn rebuild_at(&mut self, position: Duration) -> Result<(), OutputError> {
        let Some(loaded) = self.current.as_mut() else {
            return Ok(());
        };

        let new_sink = create_sink_at(&self.stream, &loaded.path, position, self.volume)?;
        loaded.sink.stop();
        if loaded.playing {
            new_sink.play();
        }
        loaded.sink = new_sink;
        loaded.offset = position;
        Ok(())
    }
}

impl AudioOutput for RodioOutput {
    fn load(&mut self, resource_id: &str) -> Result<Duration, OutputError> {
        let path = self.resolver.resolve(resource_id);
        let decoder = open_decoder(&path)?;
        let duration = probe_duration(&path, &decoder).unwrap_or_else(|| {
            warn!(path = %path.display(), "unknown duration, scrubbing disabled");
            Duration::ZERO
        });

        let sink = sink_from(&self.stream, decoder, Duration::ZERO, self.volume);
        if let Some(old) = self.current.take() {
            old.sink.stop();
        }

        info!(path = %path.display(), duration_ms = duration.as_millis() as u64, "loaded");
        self.current = Some(Loaded {
            path,
            duration,
            sink,
            offset: Duration::ZERO,
            playing: false,
        });
        Ok(duration)
    }

    fn play(&mut self) {
        if let Some(loaded) = self.current.as_mut() {
            loaded.sink.play();
            loaded.playing = true;
        }
    }

    fn pause(&mut self) {
        if let Some(loaded) = self.current.as_mut() {
            loaded.sink.pause();
            loaded.playing = false;
        }
    }

    fn stop(&mut self) {
        if let Some(loaded) = self.current.as_mut() {
            loaded.sink.pause();
            loaded.playing = false;
        }
        if let Err(e) = self.rebuild_at(Duration::ZERO) {
            // The old sink would keep reporting its position; release it so
            // the output reads as rewound.
            warn!(error = %e, "failed to reopen audio on stop, releasing it");
            if let Some(old) = self.current.take() {
                old.sink.stop();
            }
        }
    }

    fn seek(&mut self, position: Duration) {
        let Some(duration) = self.current.as_ref().map(|l| l.duration) else {
            return;
        };
        debug!(position_ms = position.as_millis() as u64, "seek");
        if let Err(e) = self.rebuild_at(position.min(duration)) {
            warn!(error = %e, "failed to reopen audio for seeking");
        }
    }

    fn current_position(&self) -> Duration {
        self.current
            .as_ref()
            .map(|l| (l.offset + l.sink.get_pos()).min(l.duration))
            .unwrap_or(Duration::ZERO)
    }

    fn shutdown(&mut self, fade: Duration) {
        if let Some(loaded) = self.current.take() {
            if loaded.playing {
                fade_out_sink(&loaded.sink, fade);
            }
            loaded.sink.stop();
        }
    }
}
