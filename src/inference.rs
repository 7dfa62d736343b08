//! Priority inference between user stories and the items they rely on.
//!
//! Two directions are supported:
//!
//! - **Story priority** is inferred from its dependencies: a story is only as
//!   strong as its weakest required feature or policy, so the inferred tier is
//!   the minimum over the dependency set.
//! - **Item priority** is inferred from what relies on it: an item must be at
//!   least as important as the most important story that needs it, and a
//!   policy at least as important as any feature built on it.
//!
//! Disagreements with declared priorities are reported as [`PriorityMismatch`]
//! values and logged; only item tiers are ever adjusted.

use crate::model::{Catalog, ItemKind, PriorityTier, UserStory};
use log::{info, warn};

/// A declared priority that is lower than the inferred one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityMismatch {
    pub key: String,
    pub declared: PriorityTier,
    pub inferred: PriorityTier,
}

/// Inferred priority of a story: the least critical tier among its dependencies.
///
/// A story that relies on nothing is treated as `Low`.
pub fn infer_story_priority(story: &UserStory, catalog: &Catalog) -> PriorityTier {
    story
        .relies_on
        .iter()
        .filter_map(|key| catalog.item(key))
        .map(|item| item.tier)
        .min()
        .unwrap_or(PriorityTier::Low)
}

/// Report stories whose declared priority is below the inferred priority.
///
/// Stories without a declared priority are never reported.
pub fn check_story_priorities(catalog: &Catalog) -> Vec<PriorityMismatch> {
    let mut mismatches = Vec::new();

    for story in catalog.user_stories() {
        if story.relies_on.is_empty() {
            info!(
                "{} does not rely on any feature or policy, treating as Low",
                story.key
            );
        }
        let inferred = infer_story_priority(story, catalog);
        if let Some(declared) = story.priority
            && declared < inferred
        {
            warn!(
                "{} has priority {}, lower than inferred priority {}",
                story.key, declared, inferred
            );
            mismatches.push(PriorityMismatch {
                key: story.key.clone(),
                declared,
                inferred,
            });
        }
    }

    mismatches
}

/// Infer feature and policy priorities from the items and stories that rely on them.
///
/// The inferred tier of a feature is the highest declared priority among its
/// dependent stories. A policy also takes the tiers of the features relying
/// on it into account, so features are settled (and adjusted) first. Items
/// below their inferred tier are reported and, when `adjust` is set, raised
/// to it. Items above it are left alone.
pub fn infer_item_priorities(catalog: &mut Catalog, adjust: bool) -> Vec<PriorityMismatch> {
    let mut mismatches = infer_tiers(catalog, ItemKind::Feature, adjust);
    mismatches.extend(infer_tiers(catalog, ItemKind::Policy, adjust));
    mismatches
}

fn infer_tiers(catalog: &mut Catalog, kind: ItemKind, adjust: bool) -> Vec<PriorityMismatch> {
    let items = match kind {
        ItemKind::Feature => catalog.features(),
        ItemKind::Policy => catalog.policies(),
    };
    let mut mismatches = Vec::new();

    for item in items {
        let stories = catalog.dependents_of(&item.key).map(|s| s.priority);
        let features = catalog.features_relying_on(&item.key).map(|f| Some(f.tier));
        let mut sources = stories.chain(features).peekable();
        if sources.peek().is_none() {
            info!("{} is not relied upon by any issue", item.key);
            continue;
        }

        let Some(inferred) = sources.flatten().max() else {
            continue;
        };

        if item.tier < inferred {
            warn!(
                "{} has priority {}, lower than inferred priority {}",
                item.key, item.tier, inferred
            );
            mismatches.push(PriorityMismatch {
                key: item.key.clone(),
                declared: item.tier,
                inferred,
            });
        }
    }

    if adjust {
        for m in &mismatches {
            info!("{} priority changed {} -> {}", m.key, m.declared, m.inferred);
            catalog.set_tier(&m.key, m.inferred);
        }
    }

    mismatches
}
