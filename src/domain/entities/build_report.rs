//! BuildReport entity - the result of scanning one entity directory

use serde::Serialize;

use super::LookupIndex;
use crate::domain::value_objects::{EntityKind, Slug};

/// A record file that contributed only its identity mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// File name inside the entity directory
    pub file: String,
    /// Why no name alias was derived
    pub reason: String,
}

/// A key whose target was replaced by a later record in scan order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub key: String,
    pub displaced: String,
    pub winner: String,
}

/// Lookup index plus the data-quality findings from building it
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub kind: EntityKind,
    /// Canonical slugs of every record scanned, in scan order
    pub slugs: Vec<Slug>,
    pub index: LookupIndex,
    pub skipped: Vec<SkippedFile>,
    pub collisions: Vec<Collision>,
}

impl BuildReport {
    pub fn empty(kind: EntityKind) -> Self {
        Self {
            kind,
            slugs: Vec::new(),
            index: LookupIndex::new(),
            skipped: Vec::new(),
            collisions: Vec::new(),
        }
    }

    /// Number of record files scanned
    pub fn records(&self) -> usize {
        self.slugs.len()
    }

    /// Canonical slugs that `normalize` would change
    pub fn unnormalized_slugs(&self) -> impl Iterator<Item = &Slug> {
        self.slugs.iter().filter(|s| !s.is_normalized())
    }

    /// True when no file was skipped and no key changed hands
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.collisions.is_empty()
    }
}
