//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! lease contract test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for parties, banking and dates
//! - `builders`: Builder for complete contracts
//! - `assertions`: Assertion helpers for assembled documents
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
