// The top-level input document. Schema validation is an external
// collaborator in principle, but since no separate schema-validation
// crate sits in front of this one, `load_str` folds structural/shape
// failures into the same `Schema` error rather than inventing a second
// pre-resolve stage.

use serde::{Deserialize, Serialize};

use crate::domain::{ElectricalConfig, PlumbingConfig, RoomConfig};
use crate::error::FloorScriptError;
use crate::units::UnitSystem;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerConfig {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub id: String,
    pub title: String,
    pub rooms: Vec<RoomConfig>,
    #[serde(default)]
    pub electrical: Option<ElectricalConfig>,
    #[serde(default)]
    pub plumbing: Option<PlumbingConfig>,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

/// The document root. `version` is carried but not yet branched on — the
/// resolver currently understands one format version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    pub project: ProjectConfig,
    pub units: UnitSystem,
    pub plans: Vec<PlanConfig>,
}

/// Parse a FloorScript document: try JSON first, fall back to YAML; if both
/// fail, raise `Parse` carrying the YAML diagnostic.
pub fn load_str(input: &str) -> Result<Config, FloorScriptError> {
    if let Ok(config) = serde_json::from_str::<Config>(input) {
        return validate_non_empty_plans(config);
    }
    match serde_yaml::from_str::<Config>(input) {
        Ok(config) => validate_non_empty_plans(config),
        Err(yaml_err) => Err(FloorScriptError::Parse { yaml_diagnostic: yaml_err.to_string() }),
    }
}

fn validate_non_empty_plans(config: Config) -> Result<Config, FloorScriptError> {
    if config.plans.is_empty() {
        return Err(FloorScriptError::Schema {
            issues: vec![crate::error::SchemaIssue::new("plans", "must be a non-empty array")],
        });
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_JSON: &str = r#"{
        "version": "0.1",
        "project": {"title": "T"},
        "units": "imperial",
        "plans": [{"id": "main", "title": "P", "rooms": []}]
    }"#;

    #[test]
    fn loads_minimal_json() {
        let config = load_str(MINIMAL_JSON).unwrap();
        assert_eq!(config.project.title, "T");
        assert_eq!(config.units, UnitSystem::Imperial);
        assert_eq!(config.plans.len(), 1);
    }

    #[test]
    fn loads_equivalent_yaml() {
        let yaml = "
version: \"0.1\"
project:
  title: T
units: imperial
plans:
  - id: main
    title: P
    rooms: []
";
        let config = load_str(yaml).unwrap();
        assert_eq!(config.project.title, "T");
    }

    #[test]
    fn rejects_empty_plans() {
        let json = r#"{
            "version": "0.1",
            "project": {"title": "T"},
            "units": "imperial",
            "plans": []
        }"#;
        let err = load_str(json).unwrap_err();
        assert!(matches!(err, FloorScriptError::Schema { .. }));
    }

    #[test]
    fn rejects_garbage_input() {
        let err = load_str("not json, not yaml: [[[").unwrap_err();
        assert!(matches!(err, FloorScriptError::Parse { .. }));
    }
}
