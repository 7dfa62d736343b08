//! Literal text substitutions applied to a rendered report before compiling.
//!
//! Rules are applied in order, each to the output of the previous one.
//! Patterns are plain strings, not regular expressions.

use crate::template::RenderedReport;
use serde::{Deserialize, Serialize};

/// Built-in rules, in application order.
const DEFAULT_RULES: &[(&str, &str)] = &[
    // Tracker exports abbreviate the top tier.
    ("Crit priority", "Critical priority"),
    (", Crit)", ", Critical)"),
    // An unescaped & is a LaTeX column separator.
    ("Search & Discovery", "Search \\& Discovery"),
];

/// Replace every occurrence of `pattern` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub pattern: String,
    pub replacement: String,
}

impl SubstitutionRule {
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.pattern, &self.replacement)
    }
}

/// The built-in rule table.
pub fn default_rules() -> Vec<SubstitutionRule> {
    DEFAULT_RULES
        .iter()
        .map(|(pattern, replacement)| SubstitutionRule::new(pattern, replacement))
        .collect()
}

/// Apply `rules` in sequence to a rendered report.
pub fn post_process(rendered: RenderedReport, rules: &[SubstitutionRule]) -> RenderedReport {
    let text = rules
        .iter()
        .filter(|rule| !rule.pattern.is_empty())
        .fold(rendered.into_string(), |text, rule| rule.apply(&text));
    RenderedReport::new(text)
}
