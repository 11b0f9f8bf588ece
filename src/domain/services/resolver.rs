//! Slug resolver
//!
//! Resolves a user-supplied name or legacy slug to a canonical slug. The
//! index for each entity kind is loaded on first use and kept for the life
//! of the resolver; build a new resolver to pick up new records.

use std::sync::OnceLock;

use serde::Serialize;

use crate::domain::entities::LookupIndex;
use crate::domain::ports::IndexSource;
use crate::domain::value_objects::{normalize, EntityKind};

/// Outcome of a detailed lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Normalized form of the query
    pub query: String,
    /// Canonical slug on a hit, otherwise the normalized query
    pub slug: String,
    /// Whether the normalized query was a key in the index
    pub matched: bool,
}

/// Lazily-loaded, per-kind slug resolver
///
/// Lookups never fail. A miss returns the normalized input, which may name a
/// record that does not exist; callers treat that as "not found".
pub struct SlugResolver<S: IndexSource> {
    source: S,
    clients: OnceLock<LookupIndex>,
    firms: OnceLock<LookupIndex>,
    lobbyists: OnceLock<LookupIndex>,
}

impl<S: IndexSource> SlugResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            clients: OnceLock::new(),
            firms: OnceLock::new(),
            lobbyists: OnceLock::new(),
        }
    }

    fn cell(&self, kind: EntityKind) -> &OnceLock<LookupIndex> {
        match kind {
            EntityKind::Clients => &self.clients,
            EntityKind::Firms => &self.firms,
            EntityKind::Lobbyists => &self.lobbyists,
        }
    }

    /// Index for `kind`, loading it on first access
    pub fn index(&self, kind: EntityKind) -> &LookupIndex {
        self.cell(kind).get_or_init(|| {
            tracing::debug!(kind = %kind, "loading lookup index");
            self.source.load_index(kind)
        })
    }

    /// Whether the index for `kind` has been loaded yet
    pub fn is_loaded(&self, kind: EntityKind) -> bool {
        self.cell(kind).get().is_some()
    }

    /// Resolve a name or slug to a canonical slug, passing misses through
    pub fn resolve(&self, kind: EntityKind, input: &str) -> String {
        self.resolve_detailed(kind, input).slug
    }

    pub fn resolve_detailed(&self, kind: EntityKind, input: &str) -> Resolution {
        let query = normalize(input);
        match self.index(kind).get(&query) {
            Some(canonical) => Resolution {
                slug: canonical.to_string(),
                query,
                matched: true,
            },
            None => {
                tracing::debug!(kind = %kind, query = %query, "no lookup entry, passing through");
                Resolution {
                    slug: query.clone(),
                    query,
                    matched: false,
                }
            }
        }
    }

    pub fn resolve_client_slug(&self, input: &str) -> String {
        self.resolve(EntityKind::Clients, input)
    }

    pub fn resolve_firm_slug(&self, input: &str) -> String {
        self.resolve(EntityKind::Firms, input)
    }

    pub fn resolve_lobbyist_slug(&self, input: &str) -> String {
        self.resolve(EntityKind::Lobbyists, input)
    }
}

impl<S: IndexSource + std::fmt::Debug> std::fmt::Debug for SlugResolver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlugResolver")
            .field("source", &self.source)
            .field("clients_loaded", &self.is_loaded(EntityKind::Clients))
            .field("firms_loaded", &self.is_loaded(EntityKind::Firms))
            .field("lobbyists_loaded", &self.is_loaded(EntityKind::Lobbyists))
            .finish()
    }
}
