//! Domain Services
//!
//! Stateless index building and the lazily-caching resolver.

mod index_builder;
mod resolver;

pub use index_builder::IndexBuilder;
pub use resolver::{Resolution, SlugResolver};
