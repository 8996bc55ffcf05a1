use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// `path` relative to `root`, `/`-separated, extension kept.
fn relative_title(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Collect audio files under `dir` as tracks.
///
/// Titles are file stems and every track gets `settings.artist`; the resource
/// id is the file's full path. When several files share a stem, each of them
/// is titled by its path relative to `dir` instead, so titles stay unique.
/// Tracks are sorted case-insensitively by title.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut found: Vec<(PathBuf, String)> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            debug!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        found.push((path.to_path_buf(), stem.to_string()));
    }

    let mut stem_counts: HashMap<&str, usize> = HashMap::new();
    for (_, stem) in &found {
        *stem_counts.entry(stem.as_str()).or_default() += 1;
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut tracks: Vec<Track> = Vec::with_capacity(found.len());
    for (path, stem) in &found {
        let title = if stem_counts[stem.as_str()] > 1 {
            relative_title(dir, path)
        } else {
            stem.clone()
        };
        if !seen.insert(title.clone()) {
            warn!(path = %path.display(), %title, "skipping file with duplicate title");
            continue;
        }
        tracks.push(Track::new(
            title,
            settings.artist.as_str(),
            path.to_string_lossy(),
        ));
    }

    tracks.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    debug!(dir = %dir.display(), count = tracks.len(), "scanned library");
    tracks
}
