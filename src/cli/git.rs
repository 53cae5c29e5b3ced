//! Git-related CLI commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::cli::GlobalOptions;

/// Commit metadata queries.
#[derive(Parser)]
pub struct GitCommand {
    /// Git subcommand to execute.
    #[command(subcommand)]
    pub command: GitSubcommands,
}

/// Git subcommands.
#[derive(Subcommand)]
pub enum GitSubcommands {
    /// Prints the author name of a commit.
    Author(CommitArgs),
    /// Prints the commit date of a commit.
    Date(CommitArgs),
    /// Prints a quoted "<short-hash> <date> <subject>" line for a commit.
    #[command(name = "one-line")]
    OneLine(CommitArgs),
    /// Lists one-line summaries of every commit in START..END.
    Commits(RangeArgs),
    /// Counts the commits in START..END.
    Count(RangeArgs),
}

/// A single revision argument.
#[derive(Parser)]
pub struct CommitArgs {
    /// Commit hash or symbolic reference.
    #[arg(value_name = "COMMIT")]
    pub commit: String,
}

/// A revision range argument pair.
#[derive(Parser)]
pub struct RangeArgs {
    /// Excluded start of the range.
    #[arg(value_name = "START")]
    pub start: String,
    /// Included end of the range.
    #[arg(value_name = "END")]
    pub end: String,
}

impl GitCommand {
    /// Executes the git command.
    pub fn execute(self, global: &GlobalOptions) -> Result<()> {
        let log = global.commit_log();

        match self.command {
            GitSubcommands::Author(args) => {
                let author = log
                    .get_author(&args.commit)
                    .with_context(|| format!("Failed to read author of {}", args.commit))?;
                println!("{author}");
            }
            GitSubcommands::Date(args) => {
                let date = log
                    .get_date(&args.commit)
                    .with_context(|| format!("Failed to read date of {}", args.commit))?;
                println!("{date}");
            }
            GitSubcommands::OneLine(args) => {
                let line = log
                    .get_one_line(&args.commit)
                    .with_context(|| format!("Failed to summarize {}", args.commit))?;
                println!("{line}");
            }
            GitSubcommands::Commits(args) => {
                let commits = log
                    .get_one_line_commits(&args.start, &args.end)
                    .with_context(|| format!("Failed to list {}..{}", args.start, args.end))?;
                print!("{commits}");
            }
            GitSubcommands::Count(args) => {
                let count = log
                    .num_commits_in_range(&args.start, &args.end)
                    .with_context(|| format!("Failed to count {}..{}", args.start, args.end))?;
                println!("{count}");
            }
        }

        Ok(())
    }
}
