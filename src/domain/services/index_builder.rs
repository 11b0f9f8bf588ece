//! Lookup index builder
//!
//! Scans one entity directory and maps every derivable slug to the
//! canonical slug (file stem) of the record it came from.

use std::path::Path;

use crate::domain::entities::{BuildReport, Collision, LookupIndex, SkippedFile};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::value_objects::{normalize, EntityKind, Slug};

const RECORD_EXTENSION: &str = "json";

/// Builds lookup indexes from entity record directories
///
/// Files are processed in the order the file system lists them. Each file
/// first maps its canonical slug to itself, then (if it parses and has a
/// string `name`) maps `normalize(name)` to the canonical slug, even when
/// that is the empty string. A later insert for an existing key wins.
///
/// Nothing here fails: a missing directory yields an empty index, and a
/// bad record contributes only its identity mapping and is listed in
/// `BuildReport::skipped`.
#[derive(Debug, Clone)]
pub struct IndexBuilder<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> IndexBuilder<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Build the index for `kind` from `<data_dir>/<kind>/`
    pub fn build_kind(&self, data_dir: &Path, kind: EntityKind) -> BuildReport {
        self.build_dir(kind, &data_dir.join(kind.dir_name()))
    }

    /// Build the index for `kind` from an explicit directory
    pub fn build_dir(&self, kind: EntityKind, dir: &Path) -> BuildReport {
        let mut report = BuildReport::empty(kind);

        let files = match self.fs.list_files(dir) {
            Ok(files) => files,
            Err(FsError::NotFound(_)) => {
                tracing::debug!(kind = %kind, dir = %dir.display(), "entity directory missing");
                return report;
            }
            Err(e) => {
                tracing::warn!(kind = %kind, dir = %dir.display(), error = %e, "cannot list entity directory");
                return report;
            }
        };

        for path in files.iter().filter(|p| is_record_file(p)) {
            self.scan_record(path, &mut report);
        }

        tracing::info!(
            kind = %kind,
            records = report.records(),
            keys = report.index.len(),
            skipped = report.skipped.len(),
            collisions = report.collisions.len(),
            "built lookup index"
        );
        report
    }

    fn scan_record(&self, path: &Path, report: &mut BuildReport) {
        let file = file_name(path);
        let canonical = match path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(Slug::new)
        {
            Some(Ok(slug)) => slug,
            _ => {
                skip(report, file, "file name is not a usable slug".to_string());
                return;
            }
        };

        insert(&mut report.index, &mut report.collisions, canonical.as_str(), &canonical);
        report.slugs.push(canonical.clone());

        let content = match self.fs.read(path) {
            Ok(content) => content,
            Err(e) => {
                skip(report, file, format!("unreadable: {}", e));
                return;
            }
        };

        let record: serde_json::Value = match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(e) => {
                skip(report, file, format!("invalid JSON: {}", e));
                return;
            }
        };

        // Only `name` matters; every other field is ignored.
        let alias = match record.get("name") {
            Some(serde_json::Value::String(name)) => normalize(name),
            Some(_) => {
                skip(report, file, "`name` is not a string".to_string());
                return;
            }
            None => {
                skip(report, file, "missing `name`".to_string());
                return;
            }
        };

        if alias.is_empty() {
            tracing::warn!(kind = %report.kind, file = %file, "`name` has no slug characters, indexed under the empty key");
        }

        tracing::debug!(slug = %canonical, alias = %alias, "indexed record");
        insert(&mut report.index, &mut report.collisions, &alias, &canonical);
    }
}

fn insert(index: &mut LookupIndex, collisions: &mut Vec<Collision>, key: &str, canonical: &Slug) {
    if let Some(displaced) = index.insert(key, canonical.as_str()) {
        if displaced != canonical.as_str() {
            tracing::warn!(key, displaced = %displaced, winner = %canonical, "slug collision");
            collisions.push(Collision {
                key: key.to_string(),
                displaced,
                winner: canonical.to_string(),
            });
        }
    }
}

fn skip(report: &mut BuildReport, file: String, reason: String) {
    tracing::warn!(kind = %report.kind, file = %file, reason = %reason, "record contributes no alias");
    report.skipped.push(SkippedFile { file, reason });
}

fn is_record_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXTENSION)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
