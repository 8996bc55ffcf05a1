use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::LibrarySettings;

use super::model::{Playlist, PlaylistError, Track};
use super::scan::scan;

/// A playlist together with the directory its relative resource ids resolve against.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub playlist: Playlist,
    pub root: PathBuf,
}

/// Build the session playlist.
///
/// The root directory is `dir_arg`, else `library.directory`, else the current
/// directory. Explicit `library.tracks` entries win over scanning it.
pub fn build_catalog(
    settings: &LibrarySettings,
    dir_arg: Option<&Path>,
) -> Result<Catalog, PlaylistError> {
    let root = dir_arg
        .map(Path::to_path_buf)
        .or_else(|| settings.directory.clone())
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let tracks: Vec<Track> = if settings.tracks.is_empty() {
        let scanned = scan(&root, settings);
        if scanned.is_empty() {
            return Err(PlaylistError::NothingFound(root));
        }
        scanned
    } else {
        settings
            .tracks
            .iter()
            .map(|entry| {
                Track::new(
                    entry.title.as_str(),
                    entry.artist.as_deref().unwrap_or(&settings.artist),
                    entry.resource.as_deref().unwrap_or(&entry.title),
                )
            })
            .collect()
    };

    let playlist = Playlist::new(tracks)?;
    info!(root = %root.display(), tracks = playlist.len(), "playlist ready");
    Ok(Catalog { playlist, root })
}
