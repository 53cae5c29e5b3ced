//! Per-range contribution summaries.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::classify::ClassificationTables;
use crate::format::nice_join;
use crate::git::log::count_non_empty_lines;
use crate::git::{CommandRunner, CommitLog, RevisionRange};

/// Components touched by one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    /// Abbreviated commit hash.
    pub hash: String,
    /// Commit subject line.
    pub subject: String,
    /// Translated components tagged in the subject.
    pub components: Vec<String>,
}

/// Summary of the commits in a revision range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeSummary {
    /// The range that was summarized.
    pub range: RevisionRange,
    /// Number of commits in the range.
    pub commit_count: usize,
    /// Commits in the order the tool listed them (newest first).
    pub commits: Vec<CommitSummary>,
    /// Distinct components in first-seen order.
    pub components: Vec<String>,
    /// `components` joined as an English list.
    pub components_text: String,
}

impl RangeSummary {
    /// Renders the summary as plain text.
    pub fn render_text(&self) -> String {
        let noun = if self.commit_count == 1 {
            "commit"
        } else {
            "commits"
        };
        let mut output = format!("{}: {} {noun}\n", self.range, self.commit_count);

        if self.components.is_empty() {
            output.push_str("Components: none\n");
        } else {
            output.push_str(&format!("Components: {}\n", self.components_text));
        }

        for commit in &self.commits {
            if commit.components.is_empty() {
                output.push_str(&format!("  {} {}\n", commit.hash, commit.subject));
            } else {
                output.push_str(&format!(
                    "  {} {} ({})\n",
                    commit.hash,
                    commit.subject,
                    commit.components.join(", ")
                ));
            }
        }

        output
    }

    /// Renders the summary as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize summary to YAML")
    }

    /// Renders the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize summary to JSON")
    }
}

/// Lists the commits of `range` and classifies each by its component tags.
pub fn summarize_range<R: CommandRunner>(
    log: &CommitLog<R>,
    tables: &ClassificationTables,
    range: &RevisionRange,
) -> Result<RangeSummary> {
    let listing = log
        .get_one_line_commits(&range.start, &range.end)
        .with_context(|| format!("Failed to list commits in {range}"))?;
    let commit_count = count_non_empty_lines(&listing);

    let commits: Vec<CommitSummary> = listing
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (hash, subject) = line.split_once(' ').unwrap_or((line, ""));
            CommitSummary {
                hash: hash.to_string(),
                subject: subject.to_string(),
                components: tables.find_components(subject, hash),
            }
        })
        .collect();

    let mut components: Vec<String> = Vec::new();
    for component in commits.iter().flat_map(|c| &c.components) {
        if !components.contains(component) {
            components.push(component.clone());
        }
    }
    let components_text = nice_join(&components);

    Ok(RangeSummary {
        range: range.clone(),
        commit_count,
        commits,
        components,
        components_text,
    })
}
