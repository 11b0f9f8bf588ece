//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EntityKind;
use crate::error::SlugmapResult;

use super::loader::{self, ConfigWarning};

/// Where entity records live and which kinds to index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    /// Kinds to build; empty means all
    #[serde(default)]
    pub kinds: Vec<EntityKind>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            kinds: Vec::new(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Lookup file output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,

    #[serde(default = "default_true")]
    pub atomic_writes: bool,

    #[serde(default)]
    pub verbosity: Verbosity,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            atomic_writes: true,
            verbosity: Verbosity::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolverConfig {
    /// Load `<kind>-lookup.json` instead of scanning records when available
    #[serde(default)]
    pub prefer_prebuilt: bool,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Combine with the `-v` count from the command line; the louder wins
    pub fn with_flag_count(self, count: u8) -> Self {
        let from_flags = match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        self.max(from_flags)
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SlugmapResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SlugmapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the working directory, the user config dir,
    /// or defaults, then apply `SLUGMAP_*` environment overrides
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> SlugmapResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (SLUGMAP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Configured kinds (all if empty), deduplicated in declaration order
    pub fn enabled_kinds(&self) -> Vec<EntityKind> {
        if self.data.kinds.is_empty() {
            return EntityKind::ALL.to_vec();
        }
        let mut kinds = Vec::new();
        for kind in &self.data.kinds {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }
}
