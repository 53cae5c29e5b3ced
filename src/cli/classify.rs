//! Classification CLI commands.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::GlobalOptions;
use crate::format::nice_join;

/// Issue type and component classification.
#[derive(Parser)]
pub struct ClassifyCommand {
    /// Classify subcommand to execute.
    #[command(subcommand)]
    pub command: ClassifySubcommands,
}

/// Classify subcommands.
#[derive(Subcommand)]
pub enum ClassifySubcommands {
    /// Translates an issue type into its release-note phrase.
    #[command(name = "issue-type")]
    IssueType(IssueTypeCommand),
    /// Translates a component keyword into its display name.
    Component(ComponentCommand),
    /// Extracts known [component] tags from a commit message.
    Components(ComponentsCommand),
    /// Shows the classification tables in effect.
    Tables,
}

/// Issue type translation options.
#[derive(Parser)]
pub struct IssueTypeCommand {
    /// Issue type as reported by the tracker (any case).
    #[arg(value_name = "ISSUE_TYPE")]
    pub issue_type: String,
    /// Issue the type belongs to, quoted in warnings.
    #[arg(value_name = "ISSUE_ID")]
    pub issue_id: String,
}

/// Component translation options.
#[derive(Parser)]
pub struct ComponentCommand {
    /// Component keyword (any case).
    #[arg(value_name = "COMPONENT")]
    pub component: String,
    /// Commit the component came from, quoted in warnings.
    #[arg(value_name = "COMMIT")]
    pub commit: String,
}

/// Component extraction options.
#[derive(Parser)]
pub struct ComponentsCommand {
    /// Commit message to scan.
    #[arg(value_name = "MESSAGE")]
    pub message: String,
    /// Commit the message belongs to.
    #[arg(long, value_name = "HASH", default_value = "-")]
    pub commit: String,
}

impl ClassifyCommand {
    /// Executes the classify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<()> {
        let tables = global.load_tables()?;
        let mut warnings = Vec::new();

        match self.command {
            ClassifySubcommands::IssueType(cmd) => {
                let phrase =
                    tables.translate_issue_type(&cmd.issue_type, &cmd.issue_id, &mut warnings);
                println!("{phrase}");
            }
            ClassifySubcommands::Component(cmd) => {
                let name =
                    tables.translate_component(&cmd.component, &cmd.commit, &mut warnings);
                println!("{name}");
            }
            ClassifySubcommands::Components(cmd) => {
                let components = tables.find_components(&cmd.message, &cmd.commit);
                println!("{}", nice_join(&components));
            }
            ClassifySubcommands::Tables => {
                print!("{}", tables.to_yaml()?);
            }
        }

        for warning in &warnings {
            eprintln!("warning: {warning}");
        }

        Ok(())
    }
}
