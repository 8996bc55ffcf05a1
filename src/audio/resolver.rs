use std::path::{Path, PathBuf};

/// Maps resource ids to files on disk.
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    root: PathBuf,
    extension: String,
}

impl ResourceResolver {
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim().trim_start_matches('.').to_string(),
        }
    }

    /// Absolute ids are used as they are. Relative ids are joined onto the
    /// root; unless that names an existing file, the default extension is
    /// appended.
    pub fn resolve(&self, resource_id: &str) -> PathBuf {
        let id = Path::new(resource_id);
        if id.is_absolute() {
            return id.to_path_buf();
        }

        let path = self.root.join(id);
        if self.extension.is_empty() || path.is_file() {
            return path;
        }

        // Append rather than `set_extension`: titles may contain dots.
        let mut name = path.into_os_string();
        name.push(".");
        name.push(&self.extension);
        PathBuf::from(name)
    }
}
