//! In-memory File System
//!
//! Keeps files in insertion order so directory listings are reproducible.
//! Used to exercise listing-order-dependent behaviour without touching disk.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// In-memory file store
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace in place) a file
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path.into(), content.into());
        self
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(PathBuf, String)>> {
        // A poisoned lock only means a panicking test thread; the data is still usable.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn insert(&self, path: PathBuf, content: String) {
        let mut files = self.lock();
        match files.iter_mut().find(|(p, _)| *p == path) {
            Some(entry) => entry.1 = content,
            None => files.push((path, content)),
        }
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.lock()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().iter().any(|(p, _)| p == path)
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let files: Vec<PathBuf> = self
            .lock()
            .iter()
            .filter(|(p, _)| p.parent() == Some(dir))
            .map(|(p, _)| p.clone())
            .collect();
        if files.is_empty() {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(files)
    }
}
