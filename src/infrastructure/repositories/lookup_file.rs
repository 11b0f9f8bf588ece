//! JSON Lookup File Repository
//!
//! Persists lookup indexes as `<data_dir>/<kind>-lookup.json`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::LookupIndex;
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::value_objects::EntityKind;
use crate::error::{SlugmapError, SlugmapResult};
use crate::infrastructure::fs::LocalFs;

/// Location of the lookup file for `kind`, next to its record directory
pub fn lookup_path(data_dir: &Path, kind: EntityKind) -> PathBuf {
    data_dir.join(kind.lookup_file_name())
}

/// What `save` did with the lookup file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    Written,
    /// Existing file already had identical content
    Unchanged,
    /// Dry run; nothing touched
    Skipped,
}

/// Lookup file repository over a `FileSystem`
#[derive(Debug, Clone)]
pub struct LookupFileRepository<F: FileSystem = LocalFs> {
    fs: F,
    pretty: bool,
}

impl LookupFileRepository<LocalFs> {
    /// Create a repository on the local file system
    pub fn new() -> Self {
        Self::with_fs(LocalFs::new())
    }
}

impl Default for LookupFileRepository<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> LookupFileRepository<F> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: F) -> Self {
        Self { fs, pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Serialized form of an index, newline-terminated
    pub fn render(&self, index: &LookupIndex) -> SlugmapResult<String> {
        let mut content = index.to_json(self.pretty)?;
        content.push('\n');
        Ok(content)
    }

    /// Load a prebuilt lookup file
    ///
    /// Returns `None` when the file is absent or cannot be parsed.
    pub fn load(&self, data_dir: &Path, kind: EntityKind) -> Option<LookupIndex> {
        let path = lookup_path(data_dir, kind);
        let content = match self.fs.read(&path) {
            Ok(content) => content,
            Err(FsError::NotFound(_)) => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read lookup file");
                return None;
            }
        };

        match LookupIndex::from_json(&content) {
            Ok(index) => Some(index),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed lookup file");
                None
            }
        }
    }

    /// Write the lookup file unless it already holds the same content
    pub fn save(
        &self,
        data_dir: &Path,
        kind: EntityKind,
        index: &LookupIndex,
    ) -> SlugmapResult<WriteOutcome> {
        let content = self.render(index)?;
        self.save_rendered(data_dir, kind, &content)
    }

    /// Write already-rendered content unless the file already holds it
    pub fn save_rendered(
        &self,
        data_dir: &Path,
        kind: EntityKind,
        content: &str,
    ) -> SlugmapResult<WriteOutcome> {
        let path = lookup_path(data_dir, kind);

        if let Ok(existing) = self.fs.read(&path) {
            if existing == content {
                tracing::debug!(path = %path.display(), "lookup file unchanged");
                return Ok(WriteOutcome::Unchanged);
            }
        }

        self.fs
            .write(&path, content)
            .map_err(|e| SlugmapError::WriteFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        tracing::info!(path = %path.display(), bytes = content.len(), "wrote lookup file");
        Ok(WriteOutcome::Written)
    }
}
