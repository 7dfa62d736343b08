//! Config loading, validation, and the values derived from it.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{ReportError, Result};
use crate::postprocess::{SubstitutionRule, default_rules};
use crate::template::{FrontMatter, ReportTemplate, TemplateVariant};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// A relative `template_file` is resolved against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;
        if let Some(template) = &config.template_file
            && template.is_relative()
            && let Some(base) = path.parent()
        {
            config.template_file = Some(base.join(template));
        }
        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ReportError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Find `fpreport.yaml` in `dir`, if present.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Load from an explicit path, else from `dir/fpreport.yaml`, else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::discover(dir) {
                Some(path) => Self::load(path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `compiler` must be non-empty and reference `{file}`
    /// - `date_format` must be a non-empty, valid strftime format
    /// - `substitutions` patterns must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.compiler.trim().is_empty() {
            return Err(ReportError::Config(
                "config validation failed: compiler must not be empty".to_string(),
            ));
        }
        if !self.compiler.contains("{file}") {
            return Err(ReportError::Config(format!(
                "config validation failed: compiler '{}' must contain {{file}}",
                self.compiler
            )));
        }
        if self.date_format.trim().is_empty() {
            return Err(ReportError::Config(
                "config validation failed: date_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ReportError::Config(format!(
                "config validation failed: date_format '{}' is not a valid strftime format",
                self.date_format
            )));
        }
        // Time and zone fields parse fine but have nothing to print for a date.
        if self.format_date(NaiveDate::default()).is_err() {
            return Err(ReportError::Config(format!(
                "config validation failed: date_format '{}' uses time or zone fields; only date fields are allowed",
                self.date_format
            )));
        }
        if let Some(rule) = self.substitutions.iter().find(|r| r.pattern.is_empty()) {
            return Err(ReportError::Config(format!(
                "config validation failed: substitution with replacement '{}' has an empty pattern",
                rule.replacement
            )));
        }
        Ok(())
    }

    /// Front matter for `variant`, with any title/author/methodology overrides applied.
    pub fn front_matter(&self, variant: TemplateVariant) -> FrontMatter {
        let mut front = variant.front_matter();
        if let Some(title) = &self.title {
            front.title = title.clone();
        }
        if let Some(author) = &self.author {
            front.author = author.clone();
        }
        if let Some(methodology) = &self.methodology {
            front.methodology = methodology.clone();
        }
        front
    }

    /// The template to render: the custom file if configured, else the
    /// variant (`override_variant` or the configured one) with front matter.
    pub fn report_template(
        &self,
        override_variant: Option<TemplateVariant>,
    ) -> Result<ReportTemplate> {
        let template = match &self.template_file {
            Some(path) => ReportTemplate::from_file(path)?,
            None => {
                let variant = override_variant.unwrap_or(self.variant);
                ReportTemplate::from_front_matter(&self.front_matter(variant))
            }
        };
        template.validate()?;
        Ok(template)
    }

    /// Built-in post-processing rules followed by configured ones.
    pub fn rules(&self) -> Vec<SubstitutionRule> {
        let mut rules = default_rules();
        rules.extend(self.substitutions.iter().cloned());
        rules
    }

    /// Format a date with `date_format`.
    pub fn format_date(&self, date: NaiveDate) -> Result<String> {
        let mut out = String::new();
        write!(out, "{}", date.format(&self.date_format)).map_err(|_| {
            ReportError::Config(format!(
                "date_format '{}' cannot be applied to a calendar date",
                self.date_format
            ))
        })?;
        Ok(out)
    }
}
