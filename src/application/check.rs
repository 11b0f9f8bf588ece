//! Check Use Case
//!
//! Audits entity record directories without writing anything: records that
//! produced no alias, aliases that changed hands, and file names that are not
//! normalized slugs.

use std::path::Path;

use serde::Serialize;

use crate::domain::entities::{Collision, SkippedFile};
use crate::domain::ports::FileSystem;
use crate::domain::services::IndexBuilder;
use crate::domain::value_objects::EntityKind;

/// Findings for one entity kind
#[derive(Debug, Clone, Serialize)]
pub struct KindCheck {
    pub kind: EntityKind,
    pub records: usize,
    pub skipped: Vec<SkippedFile>,
    pub collisions: Vec<Collision>,
    /// Canonical slugs that differ from their own normalized form
    pub unnormalized: Vec<String>,
}

impl KindCheck {
    pub fn issue_count(&self) -> usize {
        self.skipped.len() + self.collisions.len() + self.unnormalized.len()
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub kinds: Vec<KindCheck>,
}

impl CheckResult {
    pub fn issue_count(&self) -> usize {
        self.kinds.iter().map(KindCheck::issue_count).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}

/// Check use case
pub struct CheckUseCase<F: FileSystem> {
    builder: IndexBuilder<F>,
}

impl<F: FileSystem> CheckUseCase<F> {
    pub fn new(fs: F) -> Self {
        Self {
            builder: IndexBuilder::new(fs),
        }
    }

    pub fn execute(&self, data_dir: &Path, kinds: &[EntityKind]) -> CheckResult {
        let kinds = kinds
            .iter()
            .map(|&kind| {
                let report = self.builder.build_kind(data_dir, kind);
                let unnormalized = report
                    .unnormalized_slugs()
                    .map(|s| s.to_string())
                    .collect();
                KindCheck {
                    kind,
                    records: report.records(),
                    skipped: report.skipped,
                    collisions: report.collisions,
                    unnormalized,
                }
            })
            .collect();
        CheckResult { kinds }
    }
}
