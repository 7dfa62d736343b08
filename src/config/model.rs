//! Config struct definition and default implementation.

use super::types::*;
use crate::postprocess::SubstitutionRule;
use crate::template::TemplateVariant;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for report generation.
///
/// This struct represents the contents of `fpreport.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Template settings
    // =========================================================================
    /// Built-in template variant.
    #[serde(default)]
    pub variant: TemplateVariant,

    /// Overrides the variant's title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Overrides the variant's author line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Overrides the variant's methodology paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,

    /// Custom template file. When set, variant and front matter overrides are
    /// ignored. Relative paths resolve against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_file: Option<PathBuf>,

    /// strftime format for the `{date}` placeholder.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    // =========================================================================
    // Content settings
    // =========================================================================
    /// Raise feature/policy tiers to match the stories that rely on them.
    #[serde(default = "default_true")]
    pub adjust_item_priorities: bool,

    /// Extra post-processing rules, applied after the built-in ones.
    #[serde(default)]
    pub substitutions: Vec<SubstitutionRule>,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Typesetter command line; `{file}` is replaced with the `.tex` file name.
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// Directory the `.tex` artifact (and compiler output) is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: TemplateVariant::default(),
            title: None,
            author: None,
            methodology: None,
            template_file: None,
            date_format: default_date_format(),
            adjust_item_priorities: default_true(),
            substitutions: Vec::new(),
            compiler: default_compiler(),
            output_dir: default_output_dir(),
        }
    }
}
