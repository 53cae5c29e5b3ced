//! Git command execution and commit metadata.

pub mod command;
pub mod log;

pub use command::{run_cmd, CommandError, CommandRunner, SystemRunner};
pub use log::{CommitLog, RevisionRange};
