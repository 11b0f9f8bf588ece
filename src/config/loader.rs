//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::EntityKind;
use crate::error::{SlugmapError, SlugmapResult};
use crate::infrastructure::fs::slugmap_config_dir;

use super::env_validator::{closest, EnvVarValidator};
use super::types::{Config, Verbosity};

/// File name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "slugmap.toml";

const KIND_VALUES: &[&str] = &["clients", "firms", "lobbyists"];
const VERBOSITY_VALUES: &[&str] = &["quiet", "normal", "verbose", "debug"];
const BOOL_VALUES: &[&str] = &["true", "false", "1", "0"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SlugmapResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SlugmapError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file to use, load it, and apply env overrides
///
/// An explicit path must exist. Otherwise `./slugmap.toml` is tried, then
/// `<user config dir>/slugmap/slugmap.toml` (or `$SLUGMAP_CONFIG_HOME/slugmap.toml`),
/// then built-in defaults.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> SlugmapResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(SlugmapError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(cwd.join(CONFIG_FILE_NAME)),
        slugmap_config_dir().map(|d| d.join(CONFIG_FILE_NAME)),
    ];
    for candidate in candidates.into_iter().flatten() {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (SLUGMAP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_overrides_from(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // SLUGMAP_DATA_DIR
    if let Some(dir) = var("SLUGMAP_DATA_DIR").filter(|d| !d.trim().is_empty()) {
        config.data.dir = PathBuf::from(dir);
    }

    // SLUGMAP_KINDS (comma-separated)
    if let Some(kinds) = var("SLUGMAP_KINDS") {
        let validator = EnvVarValidator::new("SLUGMAP_KINDS", KIND_VALUES);
        let parsed: Vec<EntityKind> = kinds
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .filter_map(|s| validator.parse(s, |v| v.parse::<EntityKind>().ok().map(Some), None))
            .collect();
        if !parsed.is_empty() {
            config.data.kinds = parsed;
        }
    }

    // SLUGMAP_VERBOSITY
    if let Some(verbosity) = var("SLUGMAP_VERBOSITY") {
        let validator = EnvVarValidator::new("SLUGMAP_VERBOSITY", VERBOSITY_VALUES);
        config.output.verbosity =
            validator.parse(&verbosity, parse_verbosity, config.output.verbosity);
    }

    // SLUGMAP_ATOMIC_WRITES
    if let Some(val) = var("SLUGMAP_ATOMIC_WRITES") {
        let validator = EnvVarValidator::new("SLUGMAP_ATOMIC_WRITES", BOOL_VALUES);
        config.output.atomic_writes = validator.parse(&val, parse_bool, config.output.atomic_writes);
    }

    // SLUGMAP_PREFER_PREBUILT
    if let Some(val) = var("SLUGMAP_PREFER_PREBUILT") {
        let validator = EnvVarValidator::new("SLUGMAP_PREFER_PREBUILT", BOOL_VALUES);
        config.resolver.prefer_prebuilt =
            validator.parse(&val, parse_bool, config.resolver.prefer_prebuilt);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "data",
        "dir",
        "kinds",
        "output",
        "pretty",
        "atomic_writes",
        "verbosity",
        "resolver",
        "prefer_prebuilt",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_verbosity(value: &str) -> Option<Verbosity> {
    match value.to_lowercase().as_str() {
        "quiet" => Some(Verbosity::Quiet),
        "normal" => Some(Verbosity::Normal),
        "verbose" => Some(Verbosity::Verbose),
        "debug" => Some(Verbosity::Debug),
        _ => None,
    }
}
