//! Classification of issue types and commit components for release notes.

pub mod tables;
pub mod translate;

pub use tables::ClassificationTables;
pub use translate::{Translated, Warning};
