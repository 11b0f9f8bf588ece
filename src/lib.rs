//! Slugmap - slug lookup indexes for lobbying disclosure records
//!
//! Entity records (clients, firms, lobbyists) live as one JSON file per entity,
//! named by canonical slug. Slugmap builds a lookup from every derivable slug
//! (the file name and the normalized display name) to that canonical slug, and
//! resolves user-typed names or legacy URL segments through it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{build_and_write, BuildOptions, BuildUseCase, CheckUseCase};
pub use config::{Config, Verbosity};
pub use domain::entities::{BuildReport, LookupIndex};
pub use domain::ports::{FileSystem, IndexSource};
pub use domain::services::{IndexBuilder, Resolution, SlugResolver};
pub use domain::value_objects::{normalize, EntityKind, Slug};
pub use error::{SlugmapError, SlugmapResult};
pub use infrastructure::{DataDirIndexSource, LocalFs, MemoryFs};

/// Build a lookup index for one directory using the local file system
///
/// Never fails: a missing directory gives an empty index.
pub fn build_lookup(kind: EntityKind, dir: &std::path::Path) -> LookupIndex {
    IndexBuilder::new(LocalFs::new()).build_dir(kind, dir).index
}
