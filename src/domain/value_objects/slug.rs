//! Slug Value Object
//!
//! Slugs are lowercase, hyphen-delimited identifiers made of `[a-z0-9-]`.
//! `normalize` derives one from any display string; `Slug` wraps the
//! canonical slug taken from an entity's file name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SlugmapError, SlugmapResult};

/// Map an arbitrary display string to a URL-safe slug.
///
/// Lowercases the input, keeps ASCII letters and digits, and collapses every
/// run of anything else into a single `-`. Leading and trailing hyphens are
/// dropped, so all-punctuation input yields an empty string.
///
/// # Example
/// ```
/// use slugmap::normalize;
///
/// assert_eq!(normalize("U.S. Chamber of Commerce"), "u-s-chamber-of-commerce");
/// assert_eq!(normalize("--- !!"), "");
/// ```
pub fn normalize(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Canonical slug of an entity record (its file stem)
///
/// Canonical slugs come from the data pipeline and are not required to be
/// normalized; `is_normalized` reports whether they are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Create a canonical slug, rejecting empty values and path separators
    pub fn new(value: impl Into<String>) -> SlugmapResult<Self> {
        let value = value.into();
        if value.is_empty() || value.contains(['/', '\\']) {
            return Err(SlugmapError::InvalidSlug { slug: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True when normalizing the slug leaves it unchanged
    pub fn is_normalized(&self) -> bool {
        normalize(&self.0) == self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
