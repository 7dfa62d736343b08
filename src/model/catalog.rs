//! The validated set of features, policies and user stories for one report.

use super::item::{Item, ItemKind, is_valid_key};
use super::priority::PriorityTier;
use super::story::UserStory;
use crate::error::{ReportError, Result};
use std::collections::{HashMap, HashSet};

/// Features, policies and user stories with key lookup.
///
/// Construction checks that every key has the tracker form `PROJECT-123`,
/// that keys are unique, that every key a story relies on exists and that
/// features only rely on policies, so downstream code can look items up
/// without handling dangling references.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    features: Vec<Item>,
    policies: Vec<Item>,
    user_stories: Vec<UserStory>,
    index: HashMap<String, (ItemKind, usize)>,
}

impl Catalog {
    pub fn new(
        features: Vec<Item>,
        policies: Vec<Item>,
        user_stories: Vec<UserStory>,
    ) -> Result<Self> {
        let mut catalog = Self {
            features,
            policies,
            user_stories,
            index: HashMap::new(),
        };

        for (kind, list) in [
            (ItemKind::Feature, &mut catalog.features),
            (ItemKind::Policy, &mut catalog.policies),
        ] {
            for (pos, item) in list.iter_mut().enumerate() {
                check_key_format(&item.key, kind.label())?;
                item.kind = kind;
                if let Some((other, _)) = catalog.index.insert(item.key.clone(), (kind, pos)) {
                    return Err(ReportError::Input(format!(
                        "duplicate key '{}' (already used by a {})",
                        item.key,
                        other.label().to_lowercase()
                    )));
                }
            }
        }

        for item in catalog.features.iter().chain(catalog.policies.iter()) {
            for target in &item.relies_on {
                let target_kind = catalog.index.get(target).map(|(kind, _)| *kind);
                if item.kind != ItemKind::Feature || target_kind != Some(ItemKind::Policy) {
                    return Err(ReportError::Input(format!(
                        "{} '{}' relies on '{}'; only features may rely on known policies",
                        item.kind.label().to_lowercase(),
                        item.key,
                        target
                    )));
                }
            }
        }

        let mut story_keys = HashSet::new();
        for story in &catalog.user_stories {
            check_key_format(&story.key, "User story")?;
            if catalog.index.contains_key(&story.key) || !story_keys.insert(story.key.as_str()) {
                return Err(ReportError::Input(format!(
                    "duplicate key '{}' on user story",
                    story.key
                )));
            }
            for target in &story.relies_on {
                if !catalog.index.contains_key(target) {
                    return Err(ReportError::Input(format!(
                        "user story '{}' relies on '{}', which is not a known feature or policy",
                        story.key, target
                    )));
                }
            }
        }

        Ok(catalog)
    }

    pub fn features(&self) -> &[Item] {
        &self.features
    }

    pub fn policies(&self) -> &[Item] {
        &self.policies
    }

    pub fn user_stories(&self) -> &[UserStory] {
        &self.user_stories
    }

    /// Features followed by policies.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.features.iter().chain(self.policies.iter())
    }

    /// Look up a feature or policy by key.
    pub fn item(&self, key: &str) -> Option<&Item> {
        let (kind, pos) = *self.index.get(key)?;
        match kind {
            ItemKind::Feature => self.features.get(pos),
            ItemKind::Policy => self.policies.get(pos),
        }
    }

    /// Features that rely on the given policy key, in input order.
    pub fn features_relying_on<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.features
            .iter()
            .filter(move |f| f.relies_on.iter().any(|k| k == key))
    }

    /// Stories that rely on the given feature/policy key, in input order.
    pub fn dependents_of<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a UserStory> + 'a {
        self.user_stories
            .iter()
            .filter(move |s| s.relies_on.iter().any(|k| k == key))
    }

    /// Change the tier of a feature or policy. Returns false for unknown keys.
    pub fn set_tier(&mut self, key: &str, tier: PriorityTier) -> bool {
        let Some(&(kind, pos)) = self.index.get(key) else {
            return false;
        };
        let list = match kind {
            ItemKind::Feature => &mut self.features,
            ItemKind::Policy => &mut self.policies,
        };
        match list.get_mut(pos) {
            Some(item) => {
                item.tier = tier;
                true
            }
            None => false,
        }
    }
}

fn check_key_format(key: &str, what: &str) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(ReportError::Input(format!(
            "{} key '{}' is not of the form PROJECT-123",
            what, key
        )))
    }
}
