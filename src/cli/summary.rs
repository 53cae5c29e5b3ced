//! Summary command: classifies every commit in a revision range.

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::cli::GlobalOptions;
use crate::git::RevisionRange;
use crate::notes::summarize_range;

/// Output formats for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// YAML document.
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Summary command options.
#[derive(Parser)]
pub struct SummaryCommand {
    /// Excluded start of the range (e.g. the previous release tag).
    #[arg(value_name = "START")]
    pub start: String,
    /// Included end of the range.
    #[arg(value_name = "END")]
    pub end: String,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl SummaryCommand {
    /// Executes the summary command.
    pub fn execute(self, global: &GlobalOptions) -> Result<()> {
        let tables = global.load_tables()?;
        let log = global.commit_log();
        let range = RevisionRange::new(self.start, self.end);

        let summary = summarize_range(&log, &tables, &range)?;

        let output = match self.format {
            OutputFormat::Text => summary.render_text(),
            OutputFormat::Yaml => summary.to_yaml()?,
            OutputFormat::Json => summary.to_json()? + "\n",
        };
        print!("{output}");

        Ok(())
    }
}
