//! User config directory resolution with test isolation support.
//!
//! `dirs::config_dir()` uses platform APIs that ignore `HOME`/`XDG_CONFIG_HOME`
//! on some systems, so integration tests point `SLUGMAP_CONFIG_HOME` at a temp
//! directory instead.

use std::path::PathBuf;

/// Environment variable overriding the user config directory.
pub const SLUGMAP_CONFIG_HOME_VAR: &str = "SLUGMAP_CONFIG_HOME";

/// Directory holding the user-level `slugmap.toml`.
///
/// Returns `$SLUGMAP_CONFIG_HOME` when set, else `<config_dir>/slugmap`,
/// or `None` when the platform has no config directory.
pub fn slugmap_config_dir() -> Option<PathBuf> {
    config_dir_from(std::env::var_os(SLUGMAP_CONFIG_HOME_VAR).map(PathBuf::from))
}

fn config_dir_from(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    override_dir.or_else(|| dirs::config_dir().map(|d| d.join("slugmap")))
}
