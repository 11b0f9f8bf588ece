pub mod build;
pub mod check;
pub mod normalize;
pub mod resolve;

use std::path::PathBuf;

use slugmap::{Config, EntityKind};

/// CLI flag first, then the configured data directory
pub(crate) fn data_dir(config: &Config, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| config.data.dir.clone())
}

/// CLI flag first, then the configured kinds
pub(crate) fn kinds(config: &Config, flag: Option<Vec<EntityKind>>) -> Vec<EntityKind> {
    match flag {
        Some(kinds) if !kinds.is_empty() => {
            let mut unique = Vec::with_capacity(kinds.len());
            for kind in kinds {
                if !unique.contains(&kind) {
                    unique.push(kind);
                }
            }
            unique
        }
        _ => config.enabled_kinds(),
    }
}
