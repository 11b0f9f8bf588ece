//! Data directory index source
//!
//! Feeds the resolver from `<data_dir>/<kind>/`, optionally preferring the
//! prebuilt `<kind>-lookup.json` written by `slugmap build`.

use std::path::{Path, PathBuf};

use super::LookupFileRepository;
use crate::domain::entities::LookupIndex;
use crate::domain::ports::{FileSystem, IndexSource};
use crate::domain::services::IndexBuilder;
use crate::domain::value_objects::EntityKind;
use crate::infrastructure::fs::LocalFs;

/// Index source backed by an entity data directory
#[derive(Debug, Clone)]
pub struct DataDirIndexSource<F: FileSystem + Clone = LocalFs> {
    data_dir: PathBuf,
    fs: F,
    prefer_prebuilt: bool,
}

impl DataDirIndexSource<LocalFs> {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(data_dir, LocalFs::new())
    }
}

impl<F: FileSystem + Clone> DataDirIndexSource<F> {
    pub fn with_fs(data_dir: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            data_dir: data_dir.into(),
            fs,
            prefer_prebuilt: false,
        }
    }

    /// Read `<kind>-lookup.json` first, scanning only when it is unusable
    pub fn prefer_prebuilt(mut self, prefer: bool) -> Self {
        self.prefer_prebuilt = prefer;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl<F: FileSystem + Clone> IndexSource for DataDirIndexSource<F> {
    fn load_index(&self, kind: EntityKind) -> LookupIndex {
        if self.prefer_prebuilt {
            let repo = LookupFileRepository::with_fs(self.fs.clone());
            if let Some(index) = repo.load(&self.data_dir, kind) {
                tracing::debug!(kind = %kind, keys = index.len(), "using prebuilt lookup file");
                return index;
            }
            tracing::debug!(kind = %kind, "no usable prebuilt lookup file, scanning records");
        }

        IndexBuilder::new(self.fs.clone())
            .build_kind(&self.data_dir, kind)
            .index
    }
}
