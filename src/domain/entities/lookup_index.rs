//! LookupIndex entity - derived slug to canonical slug mapping
//!
//! One index covers one entity kind. Entries are inserted in scan order and
//! a later insert for the same key replaces the earlier target.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from every derivable slug to the canonical slug it resolves to
///
/// Keys are kept sorted so serialized output is stable across runs. Only the
/// insertion order decides which target wins a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupIndex {
    entries: BTreeMap<String, String>,
}

impl LookupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping, returning the target it replaced (if any)
    pub fn insert(&mut self, key: impl Into<String>, canonical: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), canonical.into())
    }

    /// Canonical slug for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys that differ from their target (name-derived aliases)
    pub fn alias_count(&self) -> usize {
        self.entries.iter().filter(|(k, v)| k != v).count()
    }

    /// Serialize as a flat JSON object
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Parse a previously serialized index
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

impl FromIterator<(String, String)> for LookupIndex {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
