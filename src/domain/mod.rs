//! Domain Layer
//!
//! Slug normalization, lookup index building and resolution.
//!
//! ## Structure
//!
//! - `entities/` - Lookup index and build report
//! - `value_objects/` - Slugs, entity kinds, content hashes
//! - `services/` - Index builder, slug resolver
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - Record directories are read through the `FileSystem` port
//! 2. **No failures** - Bad records degrade the index instead of erroring
//! 3. **Ports & Adapters** - Index loading goes through `IndexSource`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
