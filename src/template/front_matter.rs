//! Template variants.
//!
//! All variants share one skeleton; they differ only in title, author line
//! and the methodology paragraph at the top of the report.

use super::render::{ReportTemplate, substitute_placeholders};
use serde::{Deserialize, Serialize};

/// The shared LaTeX skeleton. Besides the four report placeholders it holds
/// `{title}`, `{author}` and `{methodology}`, filled from [`FrontMatter`].
pub const SKELETON: &str = include_str!("skeleton.tex");

/// Per-variant prose placed around the shared skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub author: String,
    pub methodology: String,
}

/// Built-in report variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TemplateVariant {
    /// Full report of the working group analysis.
    #[default]
    Standard,
    /// Circulated draft inviting comment.
    Draft,
    /// Short summary for stakeholders.
    Summary,
}

impl TemplateVariant {
    pub fn front_matter(self) -> FrontMatter {
        let (title, author, methodology) = match self {
            TemplateVariant::Standard => (
                "Features and Policies Report",
                "Working Group",
                "This report was produced by analysing a set of user stories \
                 collected by the working group and identifying the features \
                 and policies required to support each of them.",
            ),
            TemplateVariant::Draft => (
                "Features and Policies Report (Draft)",
                "Working Group -- draft for comment",
                "This is a draft for community comment. The user stories, \
                 features and policies below are still under discussion and \
                 priorities may change before the final report.",
            ),
            TemplateVariant::Summary => (
                "Features and Policies Summary",
                "Working Group",
                "This summary lists the features and policies identified from \
                 the working group's user stories, grouped by priority.",
            ),
        };
        FrontMatter {
            title: title.to_string(),
            author: author.to_string(),
            methodology: methodology.to_string(),
        }
    }
}

impl ReportTemplate {
    /// Build a report template by filling front matter into the shared skeleton.
    ///
    /// The result still has to pass [`ReportTemplate::validate`]; front matter
    /// that itself contains a report placeholder will fail it.
    pub fn from_front_matter(front: &FrontMatter) -> Self {
        Self::new(substitute_placeholders(
            SKELETON,
            &[
                ("title", front.title.as_str()),
                ("author", front.author.as_str()),
                ("methodology", front.methodology.as_str()),
            ],
        ))
    }
}
