//! Features and policies.

use super::priority::PriorityTier;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static KEY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+-(\d+)").expect("valid key regex"));

static KEY_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+-\d+$").expect("valid key format regex"));

/// Which list an [`Item`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Feature,
    Policy,
}

impl ItemKind {
    /// Singular label used in item headings ("Feature: ...").
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Feature => "Feature",
            ItemKind::Policy => "Policy",
        }
    }

    /// Plural used in tier headings ("Critical priority features").
    pub fn plural(self) -> &'static str {
        match self {
            ItemKind::Feature => "features",
            ItemKind::Policy => "policies",
        }
    }
}

/// A named feature or policy with an assigned priority tier.
///
/// Items arrive from the upstream export and are never edited by the
/// assembler. The only mutation is priority adjustment during inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Tracker key, e.g. `IRS-12`.
    pub key: String,

    /// Short name shown in the heading.
    pub name: String,

    /// Assigned priority tier.
    #[serde(rename = "priority")]
    pub tier: PriorityTier,

    /// Free-text description; falls back to the name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Keys of the policies a feature depends on. Policies rely on nothing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relies_on: Vec<String>,

    /// Set from the list the item was loaded from.
    #[serde(skip)]
    pub kind: ItemKind,
}

/// A feature is an [`Item`] of kind [`ItemKind::Feature`].
pub type Feature = Item;

/// A policy is an [`Item`] of kind [`ItemKind::Policy`].
pub type Policy = Item;

impl Item {
    pub fn new(kind: ItemKind, key: &str, name: &str, tier: PriorityTier) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            tier,
            description: None,
            relies_on: Vec::new(),
            kind,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn relying_on<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relies_on.extend(keys.into_iter().map(Into::into));
        self
    }
}

/// Whether `key` has the tracker form `PROJECT-123`.
///
/// Keys are written into LaTeX anchors and headings unescaped, so nothing
/// else is accepted.
pub fn is_valid_key(key: &str) -> bool {
    KEY_FORMAT.is_match(key)
}

/// Numeric part of a tracker key (`IRS-12` -> 12); 0 when the key has no number.
///
/// Used as the sort key within a tier so `IRS-9` precedes `IRS-10`.
pub fn key_number(key: &str) -> u64 {
    KEY_NUMBER
        .captures(key)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
