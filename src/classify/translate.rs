//! Translation of raw issue types and component tags into display phrases.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::classify::ClassificationTables;

// Square-bracketed word tags such as `[sql]` or `[]`
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static COMPONENT_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\w*)\]").unwrap());

/// A value that had no entry in its classification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Issue type missing from the issue-type table.
    UnknownIssueType {
        /// The issue type as the caller supplied it.
        issue_type: String,
        /// Issue the type was read from.
        issue_id: String,
    },
    /// Component missing from the component table.
    UnknownComponent {
        /// The component as the caller supplied it.
        component: String,
        /// Commit the component was read from.
        commit_hash: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIssueType {
                issue_type,
                issue_id,
            } => write!(f, "Unknown issue type \"{issue_type}\" (see {issue_id})"),
            Self::UnknownComponent {
                component,
                commit_hash,
            } => write!(f, "Unknown component \"{component}\" (see {commit_hash})"),
        }
    }
}

/// Result of a single translation: the display value plus an optional warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    /// Mapped phrase on a hit, the lower-cased input on a miss.
    pub value: String,
    /// Set when the input was not found in its table.
    pub warning: Option<Warning>,
}

impl Translated {
    /// Appends the warning (if any) to `warnings` and returns the value.
    pub fn record(self, warnings: &mut Vec<String>) -> String {
        if let Some(warning) = self.warning {
            warnings.push(warning.to_string());
        }
        self.value
    }
}

impl ClassificationTables {
    /// Looks up an issue type, case-insensitively.
    pub fn issue_type(&self, issue_type: &str, issue_id: &str) -> Translated {
        let key = issue_type.to_lowercase();
        match self.issue_types.get(&key) {
            Some(phrase) => Translated {
                value: phrase.clone(),
                warning: None,
            },
            None => {
                debug!(issue_type, issue_id, "Unknown issue type");
                Translated {
                    value: key,
                    warning: Some(Warning::UnknownIssueType {
                        issue_type: issue_type.to_string(),
                        issue_id: issue_id.to_string(),
                    }),
                }
            }
        }
    }

    /// Looks up a component, case-insensitively.
    pub fn component(&self, component: &str, commit_hash: &str) -> Translated {
        let key = component.to_lowercase();
        match self.components.get(&key) {
            Some(name) => Translated {
                value: name.clone(),
                warning: None,
            },
            None => {
                debug!(component, commit_hash, "Unknown component");
                Translated {
                    value: key,
                    warning: Some(Warning::UnknownComponent {
                        component: component.to_string(),
                        commit_hash: commit_hash.to_string(),
                    }),
                }
            }
        }
    }

    /// Translates an issue type, appending a warning to `warnings` when it is unknown.
    pub fn translate_issue_type(
        &self,
        issue_type: &str,
        issue_id: &str,
        warnings: &mut Vec<String>,
    ) -> String {
        self.issue_type(issue_type, issue_id).record(warnings)
    }

    /// Translates a component, appending a warning to `warnings` when it is unknown.
    pub fn translate_component(
        &self,
        component: &str,
        commit_hash: &str,
        warnings: &mut Vec<String>,
    ) -> String {
        self.component(component, commit_hash).record(warnings)
    }

    /// Extracts the known `[component]` tags of a commit message, translated.
    ///
    /// Tags are matched on the lower-cased message and kept in message order,
    /// duplicates included. Unknown tags are dropped before translation, so
    /// this never produces a warning.
    pub fn find_components(&self, commit: &str, commit_hash: &str) -> Vec<String> {
        let message = commit.to_lowercase();
        COMPONENT_TAG_PATTERN
            .captures_iter(&message)
            .filter_map(|caps| caps.get(1))
            .map(|tag| tag.as_str())
            .filter(|tag| self.is_known_component(tag))
            .map(|tag| self.component(tag, commit_hash).value)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ClassificationTables {
        ClassificationTables::builtin().unwrap()
    }

    #[test]
    fn known_issue_type() {
        let mut warnings = Vec::new();
        let value = tables().translate_issue_type("Bug", "ID-1", &mut warnings);
        assert_eq!(value, "bug fixes");
        assert!(warnings.is_empty());
    }

    #[test]
    fn unknown_issue_type_warns() {
        let mut warnings = Vec::new();
        let value = tables().translate_issue_type("Typo", "ID-2", &mut warnings);
        assert_eq!(value, "typo");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Typo"));
        assert!(warnings[0].contains("ID-2"));
        assert_eq!(warnings[0], "Unknown issue type \"Typo\" (see ID-2)");
    }

    #[test]
    fn known_component() {
        let mut warnings = Vec::new();
        let value = tables().translate_component("SQL", "abc123", &mut warnings);
        assert_eq!(value, "SQL");
        assert!(warnings.is_empty());
    }

    #[test]
    fn unknown_component_warns() {
        let mut warnings = Vec::new();
        let value = tables().translate_component("unknown-thing", "abc123", &mut warnings);
        assert_eq!(value, "unknown-thing");
        assert_eq!(
            warnings,
            ["Unknown component \"unknown-thing\" (see abc123)"]
        );
    }

    #[test]
    fn fallback_is_lower_cased() {
        let translated = tables().component("Fancy-Widget", "h1");
        assert_eq!(translated.value, "fancy-widget");
        assert_eq!(
            translated.warning,
            Some(Warning::UnknownComponent {
                component: "Fancy-Widget".to_string(),
                commit_hash: "h1".to_string(),
            })
        );
    }

    #[test]
    fn multi_word_keys_match() {
        let t = tables();
        assert_eq!(t.issue_type("New Feature", "ID-3").value, "new features");
        assert_eq!(t.component("Web UI", "h1").value, "Web UI");
    }

    #[test]
    fn warnings_keep_call_order() {
        let t = tables();
        let mut warnings = Vec::new();
        t.translate_issue_type("Chore", "ID-1", &mut warnings);
        t.translate_component("gizmo", "h2", &mut warnings);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Unknown issue type"));
        assert!(warnings[1].starts_with("Unknown component"));
    }

    #[test]
    fn find_components_drops_unknown_tags_silently() {
        let found = tables().find_components("[SQL][core] fix bug [bogus]", "h1");
        assert_eq!(found, ["SQL", "Core"]);
    }

    #[test]
    fn find_components_keeps_duplicates_in_order() {
        let found = tables().find_components("[MLlib] [yarn] tweak [ML]", "h1");
        assert_eq!(found, ["MLlib", "YARN", "MLlib"]);
    }

    #[test]
    fn find_components_ignores_non_word_tags() {
        let t = tables();
        assert!(t.find_components("[web ui] [input/output] []", "h1").is_empty());
        assert!(t.find_components("no tags at all", "h1").is_empty());
    }

    #[test]
    fn find_components_with_custom_tables() {
        let t = ClassificationTables::from_yaml_str(
            "issue_types: {}\ncomponents:\n  cli: Command Line\n",
        )
        .unwrap();
        assert_eq!(t.find_components("[CLI] [SQL] fix", "h1"), ["Command Line"]);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn issue_type_translation_is_repeatable(s in ".*", id in "[A-Z]+-[0-9]+") {
                let t = tables();
                let mut first = Vec::new();
                let mut second = Vec::new();
                let a = t.translate_issue_type(&s, &id, &mut first);
                let b = t.translate_issue_type(&s, &id, &mut second);
                prop_assert_eq!(a, b);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn component_miss_returns_lower_case(s in "[a-zA-Z-]{1,12}") {
                let t = tables();
                let translated = t.component(&s, "h1");
                if translated.warning.is_some() {
                    prop_assert_eq!(translated.value, s.to_lowercase());
                }
            }

            #[test]
            fn find_components_never_yields_unknown_names(s in ".*") {
                let t = tables();
                for name in t.find_components(&s, "h1") {
                    prop_assert!(t.components.values().any(|v| *v == name));
                }
            }
        }
    }
}
