//! Recording [`AudioOutput`] for controller and runtime tests.

use std::collections::HashMap;
use std::time::Duration;

use super::output::{AudioOutput, OutputError};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Load(String),
    Play,
    Pause,
    Stop,
    Seek(Duration),
    Shutdown,
}

/// Records calls; resources without a registered duration are "missing".
#[derive(Default)]
pub(crate) struct MockOutput {
    durations: HashMap<String, Duration>,
    pub(crate) position: Duration,
    pub(crate) calls: Vec<Call>,
}

impl MockOutput {
    pub(crate) fn with(resources: &[(&str, u64)]) -> Self {
        Self {
            durations: resources
                .iter()
                .map(|(id, secs)| (id.to_string(), Duration::from_secs(*secs)))
                .collect(),
            ..Self::default()
        }
    }
}

impl AudioOutput for MockOutput {
    fn load(&mut self, resource_id: &str) -> Result<Duration, OutputError> {
        self.calls.push(Call::Load(resource_id.to_string()));
        match self.durations.get(resource_id) {
            Some(d) => {
                self.position = Duration::ZERO;
                Ok(*d)
            }
            None => Err(OutputError::Missing {
                path: resource_id.into(),
            }),
        }
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
        self.position = Duration::ZERO;
    }

    fn seek(&mut self, position: Duration) {
        self.calls.push(Call::Seek(position));
        self.position = position;
    }

    fn current_position(&self) -> Duration {
        self.position
    }

    fn shutdown(&mut self, _fade: Duration) {
        self.calls.push(Call::Shutdown);
    }
}
