//! Domain types: priority tiers, features, policies, user stories and the
//! catalog that ties them together.

mod catalog;
mod item;
mod priority;
mod story;


pub use catalog::Catalog;
pub use item::{Feature, Item, ItemKind, Policy, is_valid_key, key_number};
pub use priority::PriorityTier;
pub use story::UserStory;
