//! Loading features, policies and user stories from an export file.
//!
//! The export is YAML, or JSON when the file name ends in `.json`:
//!
//! ```yaml
//! features:
//!   - key: IRS-1
//!     name: Deposit API
//!     priority: Critical
//!     description: Programmatic deposit of new items.
//!     relies_on: [IRS-2]
//! policies:
//!   - key: IRS-2
//!     name: Embargo Policy
//!     priority: Major
//! user_stories:
//!   - key: IRS-3
//!     narrative: As a depositor I want to embargo my deposit.
//!     group: Deposit
//!     priority: Major
//!     relies_on: [IRS-1, IRS-2]
//! ```

use crate::error::{ReportError, Result};
use crate::model::{Catalog, Item, UserStory};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExportFile {
    features: Vec<Item>,
    policies: Vec<Item>,
    user_stories: Vec<UserStory>,
}

impl ExportFile {
    fn into_catalog(self) -> Result<Catalog> {
        Catalog::new(self.features, self.policies, self.user_stories)
    }
}

/// Read and validate an export file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ReportError::Input(format!(
            "failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        catalog_from_json(&content)
    } else {
        catalog_from_yaml(&content)
    };

    parsed.map_err(|e| match e {
        ReportError::Input(msg) => ReportError::Input(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Parse an export from YAML.
pub fn catalog_from_yaml(yaml: &str) -> Result<Catalog> {
    if yaml.trim().is_empty() {
        return ExportFile::default().into_catalog();
    }
    let file: ExportFile = serde_yaml::from_str(yaml)
        .map_err(|e| ReportError::Input(format!("failed to parse input YAML: {}", e)))?;
    file.into_catalog()
}

/// Parse an export from JSON.
pub fn catalog_from_json(json: &str) -> Result<Catalog> {
    let file: ExportFile = serde_json::from_str(json)
        .map_err(|e| ReportError::Input(format!("failed to parse input JSON: {}", e)))?;
    file.into_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemKind, PriorityTier};
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
features:
  - key: IRS-1
    name: Deposit API
    priority: Critical
    description: Programmatic deposit of new items.
policies:
  - key: IRS-2
    name: Embargo Policy
    priority: Major
user_stories:
  - key: IRS-3
    narrative: As a depositor I want to embargo my deposit.
    group: Deposit
    priority: Major
    relies_on: [IRS-1, IRS-2]
"#;

    #[test]
    fn parses_yaml_export() {
        let catalog = catalog_from_yaml(SAMPLE).unwrap();

        assert_eq!(catalog.features().len(), 1);
        assert_eq!(catalog.policies()[0].kind, ItemKind::Policy);
        assert_eq!(catalog.policies()[0].tier, PriorityTier::Major);
        assert!(catalog.policies()[0].description.is_none());

        let story = &catalog.user_stories()[0];
        assert_eq!(story.group.as_deref(), Some("Deposit"));
        assert_eq!(story.priority, Some(PriorityTier::Major));
        assert_eq!(story.relies_on, vec!["IRS-1", "IRS-2"]);
    }

    #[test]
    fn parses_json_export() {
        let json = r#"{
            "features": [{"key": "IRS-1", "name": "Deposit API", "priority": "Crit"}],
            "user_stories": [{"key": "IRS-3", "narrative": "Story", "relies_on": ["IRS-1"]}]
        }"#;
        let catalog = catalog_from_json(json).unwrap();
        assert_eq!(catalog.features()[0].tier, PriorityTier::Critical);
        assert!(catalog.policies().is_empty());
    }

    #[test]
    fn parses_feature_dependencies_and_rejects_bad_keys() {
        let yaml = "features:\n  - {key: IRS-1, name: X, priority: Low, relies_on: [IRS-2]}\npolicies:\n  - {key: IRS-2, name: Y, priority: Low}\n";
        let catalog = catalog_from_yaml(yaml).unwrap();
        assert_eq!(catalog.features()[0].relies_on, vec!["IRS-2"]);

        let yaml = "features:\n  - {key: 'IRS_1&x', name: X, priority: Low}\n";
        assert!(matches!(catalog_from_yaml(yaml), Err(ReportError::Input(_))));
    }

    #[test]
    fn empty_yaml_is_empty_catalog() {
        let catalog = catalog_from_yaml("").unwrap();
        assert_eq!(catalog.items().count(), 0);
        assert!(catalog.user_stories().is_empty());
    }

    #[test]
    fn bad_priority_is_input_error() {
        let yaml = "features:\n  - {key: IRS-1, name: X, priority: Blocker}\n";
        match catalog_from_yaml(yaml) {
            Err(ReportError::Input(msg)) => assert!(msg.contains("Blocker")),
            other => panic!("expected input error, got {:?}", other),
        }
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = TempDir::new().unwrap();
        let yaml_path = dir.path().join("export.yaml");
        let json_path = dir.path().join("export.JSON");
        std::fs::write(&yaml_path, SAMPLE).unwrap();
        std::fs::write(
            &json_path,
            r#"{"policies": [{"key": "IRS-2", "name": "Embargo Policy", "priority": "Low"}]}"#,
        )
        .unwrap();

        assert_eq!(load_catalog(&yaml_path).unwrap().user_stories().len(), 1);
        assert_eq!(load_catalog(&json_path).unwrap().policies().len(), 1);
    }

    #[test]
    fn load_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(
            &path,
            "user_stories:\n  - {key: IRS-3, narrative: S, relies_on: [IRS-9]}\n",
        )
        .unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
        assert!(err.to_string().contains("IRS-9"));

        let missing = load_catalog(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, ReportError::Input(_)));
    }
}
