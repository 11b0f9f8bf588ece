//! Domain Entities
//!
//! Entities produced by the index builder.

mod build_report;
mod lookup_index;

pub use build_report::{BuildReport, Collision, SkippedFile};
pub use lookup_index::LookupIndex;
