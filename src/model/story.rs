//! User stories.

use super::priority::PriorityTier;
use serde::{Deserialize, Serialize};

/// A user story and the features/policies it relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStory {
    /// Tracker key, e.g. `IRS-40`.
    pub key: String,

    /// The story text ("As a depositor I want ...").
    pub narrative: String,

    /// Grouping the story was collected under (an epic in the tracker).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Priority declared upstream, if any. Only used for consistency checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityTier>,

    /// Keys of the features and policies this story depends on.
    #[serde(default)]
    pub relies_on: Vec<String>,
}

impl UserStory {
    pub fn new(key: &str, narrative: &str) -> Self {
        Self {
            key: key.to_string(),
            narrative: narrative.to_string(),
            group: None,
            priority: None,
            relies_on: Vec::new(),
        }
    }

    pub fn relying_on<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relies_on.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_priority(mut self, priority: PriorityTier) -> Self {
        self.priority = Some(priority);
        self
    }
}
