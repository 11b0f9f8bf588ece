//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Build and write every lookup file
//! - `CheckUseCase` - Audit record directories without writing

pub mod build;
pub mod check;

pub use build::{build_and_write, BuildOptions, BuildResult, BuildUseCase, KindSummary};
pub use check::{CheckResult, CheckUseCase, KindCheck};
