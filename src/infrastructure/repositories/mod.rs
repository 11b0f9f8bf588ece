//! Repository Implementations
//!
//! Lookup file persistence and the data-directory index source.

mod data_dir;
mod lookup_file;

pub use data_dir::DataDirIndexSource;
pub use lookup_file::{lookup_path, LookupFileRepository, WriteOutcome};
