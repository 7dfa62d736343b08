//! Placeholder substitution for report templates.
//!
//! Templates are LaTeX documents, so braces are everywhere. Rather than a
//! general `{variable}` engine with escaping, substitution here is literal:
//! only the exact tokens `{date}`, `{features}`, `{policies}` and
//! `{user_stories}` are recognised and everything else passes through
//! untouched.
//!
//! Inserted values are never rescanned, so content that happens to contain
//! a placeholder token is copied verbatim.

use std::path::Path;
use thiserror::Error;

/// The four placeholders every report template must contain exactly once.
pub const REQUIRED_PLACEHOLDERS: [&str; 4] = ["date", "features", "policies", "user_stories"];

/// Error type for template contract violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A required placeholder does not occur in the template.
    #[error("required placeholder '{{{name}}}' is missing from the template")]
    MissingPlaceholder { name: String },

    /// A required placeholder occurs more than once.
    #[error("placeholder '{{{name}}}' appears {count} times, expected exactly once")]
    DuplicatePlaceholder { name: String, count: usize },

    /// The template file could not be read.
    #[error("failed to read template '{path}': {reason}")]
    Unreadable { path: String, reason: String },
}

/// A report skeleton containing the four required placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    source: String,
}

impl ReportTemplate {
    /// Wrap template text. The placeholder contract is checked by [`validate`]
    /// and again at [`render`] time.
    ///
    /// [`validate`]: ReportTemplate::validate
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template from disk and check its placeholders.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| TemplateError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let template = Self::new(source);
        template.validate()?;
        Ok(template)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Check that each required placeholder appears exactly once.
    pub fn validate(&self) -> Result<(), TemplateError> {
        for name in REQUIRED_PLACEHOLDERS {
            let count = self.source.matches(&token(name)).count();
            match count {
                1 => {}
                0 => {
                    return Err(TemplateError::MissingPlaceholder {
                        name: name.to_string(),
                    });
                }
                _ => {
                    return Err(TemplateError::DuplicatePlaceholder {
                        name: name.to_string(),
                        count,
                    });
                }
            }
        }
        Ok(())
    }
}

/// A template after substitution, ready to be written and compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    text: String,
}

impl RenderedReport {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Substitute the date and the three assembled blocks into a template.
///
/// Fails if any required placeholder is missing or repeated.
pub fn render(
    template: &ReportTemplate,
    date: &str,
    features: &str,
    policies: &str,
    user_stories: &str,
) -> Result<RenderedReport, TemplateError> {
    template.validate()?;
    let text = substitute_placeholders(
        template.source(),
        &[
            ("date", date),
            ("features", features),
            ("policies", policies),
            ("user_stories", user_stories),
        ],
    );
    Ok(RenderedReport::new(text))
}

/// Replace the first occurrence of each `{name}` token with its value.
///
/// Tokens not present are ignored, so text without any of the tokens is
/// returned unchanged. Values are inserted verbatim and not rescanned.
pub fn substitute_placeholders(text: &str, values: &[(&str, &str)]) -> String {
    let mut hits: Vec<(usize, usize, &str)> = values
        .iter()
        .filter_map(|(name, value)| {
            let token = token(name);
            text.find(&token).map(|pos| (pos, token.len(), *value))
        })
        .collect();
    hits.sort_by_key(|(pos, _, _)| *pos);

    let mut out = String::with_capacity(text.len() + hits.iter().map(|h| h.2.len()).sum::<usize>());
    let mut cursor = 0;
    for (pos, len, value) in hits {
        if pos < cursor {
            // Overlapping tokens; the earlier one wins.
            continue;
        }
        out.push_str(&text[cursor..pos]);
        out.push_str(value);
        cursor = pos + len;
    }
    out.push_str(&text[cursor..]);
    out
}

fn token(name: &str) -> String {
    format!("{{{}}}", name)
}
