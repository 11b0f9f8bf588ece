//! Error types for Slugmap
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! The normalizer, index builder and resolver never return these: their
//! failures are absorbed per file. Only configuration and output writing can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Slugmap operations
pub type SlugmapResult<T> = Result<T, SlugmapError>;

/// Main error type for Slugmap operations
#[derive(Error, Debug)]
pub enum SlugmapError {
    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config file given explicitly but missing
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Writing a lookup file failed
    #[error("failed to write lookup file {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// Canonical slug rejected (empty or contains a path separator)
    #[error("invalid canonical slug '{slug}'")]
    InvalidSlug { slug: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
