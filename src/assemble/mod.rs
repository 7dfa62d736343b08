//! Content assembly: turns features, policies and user stories into LaTeX
//! text blocks ready to be dropped into a report template.
//!
//! All functions here are pure. The three blocks are independent of each
//! other; only the user story block needs the catalog, to look up the tiers
//! it derives inferred priorities from.

mod items;
mod stories;
mod tex;


pub use items::{Relations, assemble_features, assemble_items, assemble_policies};
pub use stories::assemble_user_stories;
pub use tex::escape_tex;

use crate::model::{Catalog, ItemKind};

/// The three assembled blocks for one report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledContent {
    pub features: String,
    pub policies: String,
    pub user_stories: String,
}

/// Assemble all three blocks from a catalog, with reverse links from items to stories.
pub fn assemble_catalog(catalog: &Catalog) -> AssembledContent {
    let relations = Relations::from_stories(catalog.user_stories());
    AssembledContent {
        features: assemble_items(ItemKind::Feature, catalog.features(), &relations),
        policies: assemble_items(ItemKind::Policy, catalog.policies(), &relations),
        user_stories: assemble_user_stories(catalog.user_stories(), catalog),
    }
}
