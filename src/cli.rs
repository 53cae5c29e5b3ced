//! CLI interface for relnotes.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::classify::ClassificationTables;
use crate::git::{CommitLog, SystemRunner};

pub mod classify;
pub mod git;
pub mod help;
pub mod summary;

/// relnotes: commit metadata helpers for writing release notes.
#[derive(Parser)]
#[command(name = "relnotes")]
#[command(about = "Commit metadata helpers for writing release notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Options shared by every command.
    #[command(flatten)]
    pub global: GlobalOptions,

    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Repository directory to run git in (defaults to the current directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// YAML file replacing the built-in classification tables.
    #[arg(long, global = true, value_name = "PATH")]
    pub tables: Option<PathBuf>,
}

impl GlobalOptions {
    /// Builds a commit log reader for the selected repository.
    pub fn commit_log(&self) -> CommitLog {
        match &self.repo {
            Some(dir) => CommitLog::new(SystemRunner::in_dir(dir)),
            None => CommitLog::system(),
        }
    }

    /// Loads the classification tables for this run.
    pub fn load_tables(&self) -> Result<ClassificationTables> {
        ClassificationTables::resolve(self.tables.as_deref())
    }
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Commit metadata queries.
    Git(git::GitCommand),
    /// Issue type and component classification.
    Classify(classify::ClassifyCommand),
    /// Summarizes the commits and components of a revision range.
    Summary(summary::SummaryCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Git(git_cmd) => git_cmd.execute(&self.global),
            Commands::Classify(classify_cmd) => classify_cmd.execute(&self.global),
            Commands::Summary(summary_cmd) => summary_cmd.execute(&self.global),
            Commands::HelpAll(help_cmd) => help_cmd.execute(),
        }
    }
}
