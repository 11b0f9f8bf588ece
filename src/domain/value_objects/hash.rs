//! Content hash of a serialized lookup file
//!
//! Reported per kind by `build` so two builds can be compared by digest.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// SHA-256 digest rendered as `sha256:<hex>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    pub const PREFIX: &'static str = "sha256:";

    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, Sha256::digest(content)))
    }

    pub fn from_content(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without the prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
