//! Helpers for turning audio files into `rodio` sinks.
//!
//! Seeking rebuilds the sink from the file and skips into it, so every sink
//! starts paused at an explicit offset.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::output::OutputError;

pub(super) type FileDecoder = Decoder<BufReader<File>>;

pub(super) fn open_decoder(path: &Path) -> Result<FileDecoder, OutputError> {
    if !path.is_file() {
        return Err(OutputError::Missing {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| OutputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| OutputError::Undecodable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Total duration of `decoder`, falling back to the container's stream
/// properties when the decoder cannot tell.
pub(super) fn probe_duration(path: &Path, decoder: &FileDecoder) -> Option<Duration> {
    decoder
        .total_duration()
        .or_else(|| {
            lofty::read_from_path(path)
                .ok()
                .map(|tagged| tagged.properties().duration())
        })
        .filter(|d| !d.is_zero())
}

/// Wrap `decoder` in a paused `Sink` that starts at `start_at`.
pub(super) fn sink_from(
    stream: &OutputStream,
    decoder: FileDecoder,
    start_at: Duration,
    volume: f32,
) -> Sink {
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let source = decoder.skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    sink
}

/// Create a paused `Sink` for the file at `path` that starts at `start_at`.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
    volume: f32,
) -> Result<Sink, OutputError> {
    let decoder = open_decoder(path)?;
    Ok(sink_from(stream, decoder, start_at, volume))
}

/// Ramp `sink` down to silence over `fade_out`.
pub(super) fn fade_out_sink(sink: &Sink, fade_out: Duration) {
    let fade_out_ms = fade_out.as_millis() as u64;
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    let start = sink.volume();
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(start * (1.0 - t));
        std::thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
