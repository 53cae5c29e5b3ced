//! # relnotes
//!
//! Helpers for writing release notes from version-control history.
//!
//! ## Features
//!
//! - Commit metadata queries that shell out to `git`
//! - Issue type and component classification with warning collection
//! - English list formatting for contributor summaries
//!
//! ## Quick Start
//!
//! ```rust
//! use relnotes::classify::ClassificationTables;
//! use relnotes::format::nice_join;
//!
//! let tables = ClassificationTables::builtin().unwrap();
//! let components = tables.find_components("[SQL][core] Fix join", "abc123");
//! assert_eq!(nice_join(&components), "SQL and Core");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod cli;
pub mod format;
pub mod git;
pub mod notes;

pub use crate::cli::Cli;

/// The current version of relnotes.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
