//! FileSystem port - abstraction over file I/O operations
//!
//! The index builder and the batch writer only see this trait, so tests can
//! drive them from an in-memory store with a chosen listing order.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File or directory not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Convert an I/O error, keeping the path for the common kinds
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        Self::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory, insertion-ordered listing
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file, replacing it atomically
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// List the regular files directly inside `dir`
    ///
    /// Order is whatever the backing store yields; callers must not assume
    /// it is sorted.
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).list_files(dir)
    }
}
