//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory followed by a
/// rename, so readers never observe a half-written lookup file.
#[derive(Debug, Clone, Copy)]
pub struct LocalFs {
    atomic_writes: bool,
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFs {
    /// Create a new LocalFs instance with atomic writes enabled
    pub fn new() -> Self {
        Self {
            atomic_writes: true,
        }
    }

    /// Toggle tempfile + rename writes (plain `fs::write` when disabled)
    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))?;

        if !self.atomic_writes {
            return std::fs::write(path, content).map_err(|e| FsError::from_io(e, path));
        }

        let mut tmp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(e, parent))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::from_io(e, path))?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)
            .map_err(|e| FsError::Other(format!("{}: {}", path.display(), e.error)))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Regular files in `dir`, following symlinks
    ///
    /// Only a missing or unreadable `dir` is an error. An entry that cannot
    /// be read is logged and left out.
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|e| FsError::from_io(e, dir))?;
        Ok(entries.filter_map(|entry| listed_file(dir, entry)).collect())
    }
}

fn listed_file(dir: &Path, entry: std::io::Result<std::fs::DirEntry>) -> Option<PathBuf> {
    let path = match entry {
        Ok(entry) => entry.path(),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
            return None;
        }
    };
    // `Path::is_file` follows symlinks; a dangling link is not a file.
    path.is_file().then_some(path)
}
