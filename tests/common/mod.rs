//! Common test utilities for Slugmap CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_output_contains!`, `assert_lookup_entry!`
//! - Fixtures: Reusable entity records

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
