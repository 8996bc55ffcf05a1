use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

/// One playable playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// Opaque handle the audio output resolves to a file.
    pub resource_id: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            resource_id: resource_id.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("playlist is empty")]
    Empty,
    #[error("no audio files found in {0}")]
    NothingFound(PathBuf),
    /// Titles key the current track, so they must be unique.
    #[error("duplicate track title `{0}`")]
    DuplicateTitle(String),
}

/// Ordered, non-empty, immutable sequence of tracks.
#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(tracks.len());
        for track in &tracks {
            if !seen.insert(track.title.as_str()) {
                return Err(PlaylistError::DuplicateTitle(track.title.clone()));
            }
        }

        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Index after `index`, wrapping to the start.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping to the end.
    pub fn previous_index(&self, index: usize) -> usize {
        (index % self.len() + self.len() - 1) % self.len()
    }
}
