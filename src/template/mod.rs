//! Report templates: the shared skeleton, its front-matter variants and
//! placeholder substitution.

mod front_matter;
mod render;

pub use front_matter::{FrontMatter, SKELETON, TemplateVariant};
pub use render::{
    REQUIRED_PLACEHOLDERS, RenderedReport, ReportTemplate, TemplateError, render,
    substitute_placeholders,
};
