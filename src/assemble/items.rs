//! Tiered feature and policy blocks.

use super::tex::{escape_tex, hyperlink, hypertarget, sentence};
use crate::model::{Item, ItemKind, PriorityTier, UserStory, key_number};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// Reverse dependency index: item key -> keys and groups of the stories
/// relying on it.
#[derive(Debug, Clone, Default)]
pub struct Relations {
    relied_upon_by: BTreeMap<String, Vec<String>>,
    story_groups: BTreeMap<String, BTreeSet<String>>,
}

impl Relations {
    pub fn from_stories(stories: &[UserStory]) -> Self {
        let mut relied_upon_by: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut story_groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for story in stories {
            for target in &story.relies_on {
                if let Some(group) = &story.group {
                    story_groups
                        .entry(target.clone())
                        .or_default()
                        .insert(group.clone());
                }
                let entry = relied_upon_by.entry(target.clone()).or_default();
                if !entry.contains(&story.key) {
                    entry.push(story.key.clone());
                }
            }
        }
        for keys in relied_upon_by.values_mut() {
            keys.sort_by_key(|k| key_number(k));
        }
        Self {
            relied_upon_by,
            story_groups,
        }
    }

    pub fn relied_upon_by(&self, key: &str) -> &[String] {
        self.relied_upon_by
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Distinct groups of the stories relying on `key`, alphabetically.
    pub fn story_groups<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.story_groups
            .get(key)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

/// Render features grouped by tier, without reverse links.
pub fn assemble_features(features: &[Item]) -> String {
    assemble_items(ItemKind::Feature, features, &Relations::default())
}

/// Render policies grouped by tier, without reverse links.
pub fn assemble_policies(policies: &[Item]) -> String {
    assemble_items(ItemKind::Policy, policies, &Relations::default())
}

/// Render items grouped by tier (Critical, Major, Low).
///
/// Each non-empty tier gets a `\subsection` heading; empty tiers are
/// skipped. Items within a tier are ordered by key number, ties keeping
/// input order.
pub fn assemble_items(kind: ItemKind, items: &[Item], relations: &Relations) -> String {
    let mut out = String::new();

    for tier in PriorityTier::DESCENDING {
        let mut in_tier: Vec<&Item> = items.iter().filter(|i| i.tier == tier).collect();
        if in_tier.is_empty() {
            continue;
        }
        in_tier.sort_by_key(|i| key_number(&i.key));

        let _ = write!(out, "\\subsection{{{} priority {}}}\n\n", tier, kind.plural());
        for item in in_tier {
            write_item(&mut out, kind, item, relations);
        }
    }

    out
}

fn write_item(out: &mut String, kind: ItemKind, item: &Item, relations: &Relations) {
    let description = item.description.as_deref().unwrap_or(item.name.as_str());

    let _ = writeln!(out, "{}", hypertarget(&item.key));
    let _ = write!(
        out,
        "\\subsubsection{{{}: {} ({}, {})}}\n\n",
        kind.label(),
        escape_tex(&item.name),
        item.key,
        item.tier
    );
    let _ = write!(out, "{}\n\n", sentence(description));

    let dependents = relations.relied_upon_by(&item.key);
    if !dependents.is_empty() {
        let links: Vec<String> = dependents.iter().map(|k| hyperlink(k)).collect();
        let _ = write!(out, "Is relied upon by: {}\n\n", links.join(", "));
    }

    if !item.relies_on.is_empty() {
        let mut targets: Vec<&String> = item.relies_on.iter().collect();
        targets.sort_by(|a, b| key_number(a).cmp(&key_number(b)).then(a.cmp(b)));
        targets.dedup();
        let links: Vec<String> = targets.iter().map(|k| hyperlink(k)).collect();
        let _ = write!(out, "Relies on: {}\n\n", links.join(", "));
    }

    let groups: Vec<String> = relations.story_groups(&item.key).map(escape_tex).collect();
    if !groups.is_empty() {
        let _ = write!(out, "User story groups: {}\n\n", groups.join(", "));
    }
}
