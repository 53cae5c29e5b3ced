//! Commit metadata queries built on top of a [`CommandRunner`].

use std::fmt;

use serde::Serialize;

use crate::git::command::{CommandError, CommandRunner, SystemRunner};

/// Version-control binary invoked by default.
pub const DEFAULT_PROGRAM: &str = "git";

/// Format placeholder for the author name.
pub const AUTHOR_FORMAT: &str = "%an";

/// Format placeholder for the commit date.
pub const DATE_FORMAT: &str = "%cd";

/// Format for the quoted one-line summary (short hash, date, subject).
pub const ONE_LINE_FORMAT: &str = "\"%h %cd %s\"";

/// An exclusive-start, inclusive-end interval over the history (`start..end`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevisionRange {
    /// Revision whose ancestors are excluded.
    pub start: String,
    /// Revision whose ancestors are included.
    pub end: String,
}

impl RevisionRange {
    /// Creates a range from two opaque revision identifiers.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for RevisionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Reads commit metadata by shelling out to the version-control tool.
///
/// Revision identifiers are passed through untouched; an identifier the tool
/// does not know surfaces as a [`CommandError::NonZeroExit`].
#[derive(Debug, Clone)]
pub struct CommitLog<R = SystemRunner> {
    runner: R,
    program: String,
}

impl CommitLog<SystemRunner> {
    /// Creates a log reader that runs `git` in the current directory.
    pub fn system() -> Self {
        Self::new(SystemRunner::new())
    }
}

impl<R: CommandRunner> CommitLog<R> {
    /// Creates a log reader that runs `git` through `runner`.
    pub fn new(runner: R) -> Self {
        Self::with_program(runner, DEFAULT_PROGRAM)
    }

    /// Creates a log reader that invokes `program` instead of `git`.
    pub fn with_program(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Returns the underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Returns the author name of `commit_hash`.
    pub fn get_author(&self, commit_hash: &str) -> Result<String, CommandError> {
        self.show(AUTHOR_FORMAT, commit_hash)
    }

    /// Returns the commit date of `commit_hash`, formatted by the tool.
    pub fn get_date(&self, commit_hash: &str) -> Result<String, CommandError> {
        self.show(DATE_FORMAT, commit_hash)
    }

    /// Returns `"<short-hash> <date> <subject>"`, quotes included.
    pub fn get_one_line(&self, commit_hash: &str) -> Result<String, CommandError> {
        self.show(ONE_LINE_FORMAT, commit_hash)
    }

    /// Returns the newline-separated one-line summaries of `start_hash..end_hash`.
    pub fn get_one_line_commits(
        &self,
        start_hash: &str,
        end_hash: &str,
    ) -> Result<String, CommandError> {
        let range = format!("{start_hash}..{end_hash}");
        self.runner
            .run(&[self.program.as_str(), "log", "--oneline", &range])
    }

    /// Counts the commits in `start_hash..end_hash`, ignoring blank lines.
    pub fn num_commits_in_range(
        &self,
        start_hash: &str,
        end_hash: &str,
    ) -> Result<usize, CommandError> {
        let output = self.get_one_line_commits(start_hash, end_hash)?;
        Ok(count_non_empty_lines(&output))
    }

    fn show(&self, format: &str, commit_hash: &str) -> Result<String, CommandError> {
        let pretty = format!("--pretty=format:{format}");
        self.runner
            .run(&[self.program.as_str(), "show", "--quiet", &pretty, commit_hash])
    }
}

/// Counts the lines of `output` that are not empty.
pub(crate) fn count_non_empty_lines(output: &str) -> usize {
    output.split('\n').filter(|line| !line.is_empty()).count()
}
