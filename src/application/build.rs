//! Build Use Case
//!
//! Builds the lookup index for each requested entity kind and writes it to
//! `<data_dir>/<kind>-lookup.json`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::{BuildReport, Collision, SkippedFile};
use crate::domain::ports::FileSystem;
use crate::domain::services::IndexBuilder;
use crate::domain::value_objects::{ContentHash, EntityKind};
use crate::error::SlugmapResult;
use crate::infrastructure::repositories::{lookup_path, LookupFileRepository, WriteOutcome};

/// Options for the build operation
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Root holding one directory per entity kind
    pub data_dir: PathBuf,
    /// Kinds to build, in order
    pub kinds: Vec<EntityKind>,
    /// Compute everything but write nothing
    pub dry_run: bool,
}

impl BuildOptions {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            kinds: EntityKind::ALL.to_vec(),
            dry_run: false,
        }
    }

    pub fn with_kinds(mut self, kinds: Vec<EntityKind>) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Per-kind build summary
#[derive(Debug, Clone, Serialize)]
pub struct KindSummary {
    pub kind: EntityKind,
    pub records: usize,
    pub keys: usize,
    pub aliases: usize,
    pub output: PathBuf,
    pub outcome: WriteOutcome,
    /// Digest of the rendered lookup file, computed on dry runs too
    pub hash: ContentHash,
    pub skipped: Vec<SkippedFile>,
    pub collisions: Vec<Collision>,
}

impl KindSummary {
    fn from_report(
        report: BuildReport,
        output: PathBuf,
        outcome: WriteOutcome,
        hash: ContentHash,
    ) -> Self {
        Self {
            kind: report.kind,
            records: report.records(),
            keys: report.index.len(),
            aliases: report.index.alias_count(),
            output,
            outcome,
            hash,
            skipped: report.skipped,
            collisions: report.collisions,
        }
    }
}

/// Result of the build operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildResult {
    pub kinds: Vec<KindSummary>,
}

impl BuildResult {
    pub fn written(&self) -> usize {
        self.count(WriteOutcome::Written)
    }

    pub fn unchanged(&self) -> usize {
        self.count(WriteOutcome::Unchanged)
    }

    fn count(&self, outcome: WriteOutcome) -> usize {
        self.kinds.iter().filter(|k| k.outcome == outcome).count()
    }

    pub fn total_skipped(&self) -> usize {
        self.kinds.iter().map(|k| k.skipped.len()).sum()
    }

    pub fn total_collisions(&self) -> usize {
        self.kinds.iter().map(|k| k.collisions.len()).sum()
    }
}

/// Build use case - full rebuild of every requested lookup file
pub struct BuildUseCase<F: FileSystem + Clone> {
    fs: F,
    pretty: bool,
}

impl<F: FileSystem + Clone> BuildUseCase<F> {
    pub fn new(fs: F) -> Self {
        Self { fs, pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Build every requested kind
    ///
    /// Scanning never fails; only writing a lookup file can.
    pub fn execute(&self, options: &BuildOptions) -> SlugmapResult<BuildResult> {
        let builder = IndexBuilder::new(self.fs.clone());
        let repo = LookupFileRepository::with_fs(self.fs.clone()).with_pretty(self.pretty);

        let mut result = BuildResult::default();
        for &kind in &options.kinds {
            let report = builder.build_kind(&options.data_dir, kind);
            let output = lookup_path(&options.data_dir, kind);
            let content = repo.render(&report.index)?;
            let hash = ContentHash::from_content(&content);
            let outcome = if options.dry_run {
                WriteOutcome::Skipped
            } else {
                repo.save_rendered(&options.data_dir, kind, &content)?
            };
            result
                .kinds
                .push(KindSummary::from_report(report, output, outcome, hash));
        }
        Ok(result)
    }
}

/// Build and write a single kind's lookup file on the local file system
///
/// Shorthand for the batch step run by site builds.
pub fn build_and_write(data_dir: &Path, kind: EntityKind) -> SlugmapResult<KindSummary> {
    let options = BuildOptions::new(data_dir).with_kinds(vec![kind]);
    let result = BuildUseCase::new(crate::infrastructure::fs::LocalFs::new()).execute(&options)?;
    result
        .kinds
        .into_iter()
        .next()
        .ok_or_else(|| std::io::Error::other("build produced no summary").into())
}
