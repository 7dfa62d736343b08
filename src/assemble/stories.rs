//! User story block.

use super::tex::{escape_tex, hyperlink, hypertarget, sentence};
use crate::inference::infer_story_priority;
use crate::model::{Catalog, UserStory, key_number};
use std::fmt::Write;

const NO_DEPENDENCIES: &str =
    "\\textit{No features or policies have been associated with this user story.}";

/// Render user stories in the order given, each annotated with its inferred priority.
///
/// `catalog` supplies the tiers of the features and policies the stories rely on.
pub fn assemble_user_stories(stories: &[UserStory], catalog: &Catalog) -> String {
    let mut out = String::new();

    for story in stories {
        let inferred = infer_story_priority(story, catalog);
        let annotation = match &story.group {
            Some(group) => format!("{}, {}, {}", story.key, escape_tex(group), inferred),
            None => format!("{}, {}", story.key, inferred),
        };

        let _ = writeln!(out, "{}", hypertarget(&story.key));
        let _ = write!(
            out,
            "\\subsubsection{{User story: {} ({})}}\n\n",
            sentence(&story.narrative),
            annotation
        );

        if story.relies_on.is_empty() {
            let _ = write!(out, "{}\n\n", NO_DEPENDENCIES);
        } else {
            let mut targets: Vec<&String> = story.relies_on.iter().collect();
            targets.sort_by(|a, b| key_number(a).cmp(&key_number(b)).then(a.cmp(b)));
            targets.dedup();
            let links: Vec<String> = targets.iter().map(|k| hyperlink(k)).collect();
            let _ = write!(out, "Relies on: {}\n\n", links.join(", "));
        }
    }

    out
}
