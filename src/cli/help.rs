//! `help-all`: every command's help text in one document.

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};

use crate::cli::Cli;

/// Width of the `=` rule printed between sections.
const SEPARATOR_WIDTH: usize = 80;

/// Prints help for every command.
#[derive(Parser)]
pub struct HelpCommand {}

/// Renders the help of the whole command tree.
pub struct HelpGenerator {
    app: Command,
}

impl Default for HelpGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpGenerator {
    /// Creates a generator for the relnotes command tree.
    pub fn new() -> Self {
        Self {
            app: Cli::command(),
        }
    }

    /// Renders the root help followed by each subcommand, depth first.
    ///
    /// Siblings are visited in name order so the output is stable.
    pub fn generate_all_help(&self) -> Result<String> {
        let mut sections = vec![self.render_command_help(&self.app, "")];
        self.collect_help_recursive(&self.app, "", &mut sections);

        let separator = format!("\n\n{}\n\n", "=".repeat(SEPARATOR_WIDTH));
        Ok(sections.join(&separator))
    }

    fn collect_help_recursive(&self, cmd: &Command, prefix: &str, sections: &mut Vec<String>) {
        let mut children: Vec<&Command> = cmd
            .get_subcommands()
            .filter(|child| child.get_name() != "help")
            .collect();
        children.sort_by(|a, b| a.get_name().cmp(b.get_name()));

        for child in children {
            let path = if prefix.is_empty() {
                child.get_name().to_string()
            } else {
                format!("{prefix} {}", child.get_name())
            };
            sections.push(self.render_command_help(child, &path));
            self.collect_help_recursive(child, &path, sections);
        }
    }

    fn render_command_help(&self, cmd: &Command, path: &str) -> String {
        let title = if path.is_empty() {
            cmd.get_name().to_string()
        } else {
            format!("relnotes {path}")
        };
        let about = cmd
            .get_about()
            .map_or_else(|| "No description available".to_string(), ToString::to_string);

        format!("{title} - {about}\n\n{}", cmd.clone().render_help())
    }
}

impl HelpCommand {
    /// Executes the help command.
    pub fn execute(self) -> Result<()> {
        println!("{}", HelpGenerator::new().generate_all_help()?);
        Ok(())
    }
}
