//! Environment variable configuration overlay
//!
//! Supports environment variables in the format:
//! `WAYFINDER_<section>_<field>=value`
//!
//! Examples:
//! - `WAYFINDER_DATA_SOURCE=json`
//! - `WAYFINDER_DATA_PATH=/srv/building.json`
//! - `WAYFINDER_ACCESSIBILITY_STAIRCASE_TYPES=staircase,stairs`
//! - `WAYFINDER_ROUTING_DEFAULT_WHEELCHAIR=true`
//!
//! A malformed or unknown variable fails the load.

use super::merge::{AccessibilityLayer, ConfigLayer, DataLayer, LabelsLayer, RoutingLayer};
use crate::{error::ConfigError, types::*, Result};
use std::env;
use std::path::PathBuf;

const PREFIX: &str = "WAYFINDER_";

/// Parse configuration from environment variables
pub fn from_env() -> Result<Option<ConfigLayer>> {
    layer_from_vars(env::vars())
}

/// Build a layer from `(name, value)` pairs; names without the prefix are skipped
pub fn layer_from_vars<I>(vars: I) -> Result<Option<ConfigLayer>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut layer = ConfigLayer::default();
    let mut seen = false;
    for (key, value) in vars.into_iter().filter(|(k, _)| k.starts_with(PREFIX)) {
        apply_env_var(&mut layer, &key, &value)?;
        seen = true;
    }

    Ok(seen.then_some(layer))
}

/// Apply a single environment variable to a layer
fn apply_env_var(config: &mut ConfigLayer, key: &str, value: &str) -> Result<()> {
    let key = key.strip_prefix(PREFIX).unwrap_or(key);

    let parts: Vec<&str> = key.split('_').collect();
    if parts.len() < 2 {
        return Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: "Expected format: WAYFINDER_<section>_<field>".to_string(),
        });
    }

    let section = parts[0].to_lowercase();
    let field = parts[1..].join("_").to_lowercase();

    match section.as_str() {
        "data" => apply_data_var(&mut config.data, &field, value),
        "accessibility" => apply_accessibility_var(&mut config.accessibility, &field, value),
        "labels" => apply_labels_var(&mut config.labels, &field, value),
        "routing" => apply_routing_var(&mut config.routing, &field, value),
        _ => Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: format!("Unknown section: {}", section),
        }),
    }
}

fn unknown_field(section: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: format!("{}{}_{}", PREFIX, section, field.to_uppercase()),
        message: format!("Unknown field: {}", field),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarError {
            var: var.to_string(),
            message: format!("Invalid boolean: {}", value),
        }),
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_char(var: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::EnvVarError {
            var: var.to_string(),
            message: format!("Expected a single character, got {:?}", value),
        }),
    }
}

fn apply_data_var(config: &mut DataLayer, field: &str, value: &str) -> Result<()> {
    match field {
        "source" => {
            config.source = Some(SourceKind::parse(value).ok_or_else(|| {
                ConfigError::invalid_enum("data.source", value, &SourceKind::NAMES)
            })?);
        }
        "path" => config.path = Some(PathBuf::from(value)),
        "nodes_file" => config.nodes_file = Some(value.to_string()),
        "edges_file" => config.edges_file = Some(value.to_string()),
        "delimiter" => config.delimiter = Some(parse_char("WAYFINDER_DATA_DELIMITER", value)?),
        "snapshot_path" => config.snapshot_path = Some(PathBuf::from(value)),
        "use_snapshot" => {
            config.use_snapshot = Some(parse_bool("WAYFINDER_DATA_USE_SNAPSHOT", value)?);
        }
        _ => return Err(unknown_field("DATA", field)),
    }
    Ok(())
}

fn apply_accessibility_var(
    config: &mut AccessibilityLayer,
    field: &str,
    value: &str,
) -> Result<()> {
    match field {
        "staircase_types" => config.staircase_types = Some(parse_list(value)),
        "elevator_types" => config.elevator_types = Some(parse_list(value)),
        _ => return Err(unknown_field("ACCESSIBILITY", field)),
    }
    Ok(())
}

fn apply_labels_var(config: &mut LabelsLayer, field: &str, value: &str) -> Result<()> {
    match field {
        "person_separator" => config.person_separator = Some(value.to_string()),
        _ => return Err(unknown_field("LABELS", field)),
    }
    Ok(())
}

fn apply_routing_var(config: &mut RoutingLayer, field: &str, value: &str) -> Result<()> {
    match field {
        "default_wheelchair" => {
            config.default_wheelchair =
                Some(parse_bool("WAYFINDER_ROUTING_DEFAULT_WHEELCHAIR", value)?);
        }
        _ => return Err(unknown_field("ROUTING", field)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_apply_data_vars() {
        let mut layer = ConfigLayer::default();
        apply_env_var(&mut layer, "WAYFINDER_DATA_SOURCE", "json").unwrap();
        apply_env_var(&mut layer, "WAYFINDER_DATA_PATH", "/srv/b.json").unwrap();
        apply_env_var(&mut layer, "WAYFINDER_DATA_USE_SNAPSHOT", "off").unwrap();
        apply_env_var(&mut layer, "WAYFINDER_DATA_DELIMITER", ";").unwrap();
        assert_eq!(layer.data.source, Some(SourceKind::Json));
        assert_eq!(layer.data.path, Some(PathBuf::from("/srv/b.json")));
        assert_eq!(layer.data.use_snapshot, Some(false));
        assert_eq!(layer.data.delimiter, Some(';'));
        assert_eq!(layer.data.nodes_file, None);
    }

    #[test]
    fn test_apply_list_var() {
        let mut layer = ConfigLayer::default();
        apply_env_var(
            &mut layer,
            "WAYFINDER_ACCESSIBILITY_STAIRCASE_TYPES",
            "staircase, stairs ,",
        )
        .unwrap();
        assert_eq!(
            layer.accessibility.staircase_types,
            Some(vec!["staircase".to_string(), "stairs".to_string()])
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut layer = ConfigLayer::default();
        assert!(apply_env_var(&mut layer, "WAYFINDER_DATA_SOURCE", "sqlite").is_err());
        assert!(apply_env_var(&mut layer, "WAYFINDER_ROUTING_DEFAULT_WHEELCHAIR", "maybe").is_err());
        assert!(apply_env_var(&mut layer, "WAYFINDER_DATA_DELIMITER", ";;").is_err());
        assert!(apply_env_var(&mut layer, "WAYFINDER_NOPE_FIELD", "1").is_err());
        assert!(apply_env_var(&mut layer, "WAYFINDER_DATA", "1").is_err());
    }

    #[test]
    fn test_bad_variable_fails_the_load() {
        let result = layer_from_vars(vars(&[
            ("WAYFINDER_LABELS_PERSON_SEPARATOR", " "),
            ("WAYFINDER_ROUTING_DEFAULT_WHEELCHAIR", "maybe"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::EnvVarError { var, .. }) if var == "WAYFINDER_ROUTING_DEFAULT_WHEELCHAIR"
        ));
    }

    #[test]
    fn test_unrelated_variables_skipped() {
        let layer = layer_from_vars(vars(&[("HOME", "/root"), ("PATH", "/bin")])).unwrap();
        assert_eq!(layer, None);

        let layer = layer_from_vars(vars(&[
            ("HOME", "/root"),
            ("WAYFINDER_ROUTING_DEFAULT_WHEELCHAIR", "false"),
        ]))
        .unwrap()
        .expect("overlay present");
        assert_eq!(layer.routing.default_wheelchair, Some(false));
    }

    #[test]
    fn test_from_env_overlay() {
        env::set_var("WAYFINDER_LABELS_PERSON_SEPARATOR", " | ");
        let layer = from_env().unwrap().expect("overlay present");
        assert_eq!(layer.labels.person_separator.as_deref(), Some(" | "));
        env::remove_var("WAYFINDER_LABELS_PERSON_SEPARATOR");
    }
}
