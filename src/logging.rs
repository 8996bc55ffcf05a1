//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to a file instead.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_path};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("no log file configured and no home directory to default to")]
    NoPath,
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(settings: &LoggingSettings) -> Result<Option<PathBuf>, LoggingError> {
    if !settings.enabled {
        return Ok(None);
    }

    let path = settings
        .file
        .clone()
        .or_else(default_log_path)
        .ok_or(LoggingError::NoPath)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| LoggingError::Open {
            path: path.clone(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::Open {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    Ok(Some(path))
}
