//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod entity_kind;
mod hash;
mod slug;

pub use entity_kind::EntityKind;
pub use hash::ContentHash;
pub use slug::{normalize, Slug};
