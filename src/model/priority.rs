//! Priority tiers shared by features, policies and user stories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority classification of a feature, policy or user story.
///
/// Variants are declared from least to most critical so the derived
/// `Ord` reads naturally: `Low < Major < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriorityTier {
    Low,
    Major,
    Critical,
}

impl PriorityTier {
    /// All tiers, most critical first. This is the order tiers appear in a report.
    pub const DESCENDING: [PriorityTier; 3] =
        [PriorityTier::Critical, PriorityTier::Major, PriorityTier::Low];

    /// Full display name, as used in headings and annotations.
    pub fn name(self) -> &'static str {
        match self {
            PriorityTier::Critical => "Critical",
            PriorityTier::Major => "Major",
            PriorityTier::Low => "Low",
        }
    }

    /// Abbreviated label found in upstream tracker exports.
    pub fn short_label(self) -> &'static str {
        match self {
            PriorityTier::Critical => "Crit",
            PriorityTier::Major => "Major",
            PriorityTier::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriorityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" | "crit" => Ok(PriorityTier::Critical),
            "major" => Ok(PriorityTier::Major),
            "low" => Ok(PriorityTier::Low),
            _ => Err(format!(
                "unknown priority '{}' (expected Critical, Major or Low)",
                s.trim()
            )),
        }
    }
}

impl TryFrom<String> for PriorityTier {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PriorityTier> for String {
    fn from(tier: PriorityTier) -> Self {
        tier.name().to_string()
    }
}
