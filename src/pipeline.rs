//! The report pipeline: infer priorities, assemble, render, post-process.
//!
//! Writing and compiling the result is left to [`crate::compile`], so the
//! document can be produced and inspected without a LaTeX installation.

use crate::assemble::assemble_catalog;
use crate::error::Result;
use crate::inference::{check_story_priorities, infer_item_priorities};
use crate::model::Catalog;
use crate::postprocess::{SubstitutionRule, post_process};
use crate::template::{RenderedReport, ReportTemplate, render};
use log::info;

/// Everything besides the catalog that determines the document text.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub template: ReportTemplate,
    pub date: String,
    pub rules: Vec<SubstitutionRule>,
    pub adjust_item_priorities: bool,
}

/// Produce the post-processed document for a catalog.
///
/// Feature and policy tiers may be raised first (see
/// [`infer_item_priorities`]); the catalog is modified in that case.
pub fn build_document(catalog: &mut Catalog, options: &ReportOptions) -> Result<RenderedReport> {
    info!("Checking feature and policy priorities");
    infer_item_priorities(catalog, options.adjust_item_priorities);
    info!("Checking user story priorities");
    check_story_priorities(catalog);

    let content = assemble_catalog(catalog);
    let rendered = render(
        &options.template,
        &options.date,
        &content.features,
        &content.policies,
        &content.user_stories,
    )?;

    Ok(post_process(rendered, &options.rules))
}
