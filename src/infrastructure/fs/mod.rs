//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;
mod memory;

pub use home::{slugmap_config_dir, SLUGMAP_CONFIG_HOME_VAR};
pub use local::LocalFs;
pub use memory::MemoryFs;
