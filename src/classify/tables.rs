//! Classification tables for issue types and components.
//!
//! The default tables are embedded in the binary. A YAML file with the same
//! shape can replace them, either passed explicitly or placed at
//! `$HOME/.relnotes/classification.yaml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Embedded default tables.
pub const CLASSIFICATION_YAML: &str = include_str!("../templates/classification.yaml");

/// Lookup tables from lower-case domain keywords to display phrases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassificationTables {
    /// Issue type name to contribution phrase (e.g. `bug` to `bug fixes`).
    pub issue_types: BTreeMap<String, String>,
    /// Component keyword to display name (e.g. `sql` to `SQL`).
    pub components: BTreeMap<String, String>,
}

impl ClassificationTables {
    /// Loads the tables shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(CLASSIFICATION_YAML).context("Failed to load embedded tables")
    }

    /// Parses and validates tables from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let tables: Self =
            serde_yaml::from_str(yaml).context("Failed to parse classification tables")?;
        tables.validate()?;
        Ok(tables)
    }

    /// Loads tables from a YAML file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tables file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid tables file: {}", path.display()))
    }

    /// Resolves the tables to use for a run.
    ///
    /// An explicit path must exist. Without one, the user tables file is used
    /// when present, and the embedded defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match Self::user_tables_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Using user classification tables");
                Self::load_from_path(&path)
            }
            _ => Self::builtin(),
        }
    }

    /// Returns `$HOME/.relnotes/classification.yaml`, if a home directory is known.
    pub fn user_tables_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".relnotes").join("classification.yaml"))
    }

    /// Serializes the tables back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize classification tables")
    }

    /// Returns true if `component` (already lower-cased) is a known component key.
    pub fn is_known_component(&self, component: &str) -> bool {
        self.components.contains_key(component)
    }

    fn validate(&self) -> Result<()> {
        for (table, entries) in [
            ("issue_types", &self.issue_types),
            ("components", &self.components),
        ] {
            for (key, value) in entries {
                if key.to_lowercase() != *key {
                    bail!("Key '{key}' in {table} must be lower case");
                }
                if value.trim().is_empty() {
                    bail!("Key '{key}' in {table} has an empty display name");
                }
            }
        }
        Ok(())
    }
}
