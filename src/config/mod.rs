//! Configuration module for Slugmap
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SLUGMAP_*)
//! 3. Config file (`--config`, `./slugmap.toml`, or `<config dir>/slugmap/slugmap.toml`)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{with_overrides_from, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{Config, DataConfig, OutputConfig, ResolverConfig, Verbosity};
