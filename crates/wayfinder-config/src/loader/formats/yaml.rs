//! YAML format parser

use crate::{error::ConfigError, Result};
use serde::de::DeserializeOwned;

/// Parse configuration from YAML string
pub fn parse<T: DeserializeOwned>(content: &str) -> Result<T> {
    parse_with_path(content, None)
}

/// Parse configuration from YAML string with file path for better errors
pub fn parse_with_path<T: DeserializeOwned>(content: &str, path: Option<&str>) -> Result<T> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::from_yaml_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = r#"
routing:
  default_wheelchair: true
accessibility:
  staircase_types: [stairs]
"#;
        let config: Config = parse(yaml).unwrap();
        assert!(config.routing.default_wheelchair);
        assert_eq!(config.accessibility.staircase_types, vec!["stairs"]);
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config: Config = parse("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_layer_keeps_unset_fields_empty() {
        let yaml = "routing:\n  default_wheelchair: false\n";
        let layer: crate::loader::merge::ConfigLayer = parse(yaml).unwrap();
        assert_eq!(layer.routing.default_wheelchair, Some(false));
        assert_eq!(layer.data.use_snapshot, None);
        assert_eq!(layer.labels.person_separator, None);
    }

    #[test]
    fn test_parse_invalid_source_fails() {
        let yaml = r#"
data:
  source: sqlite
"#;
        assert!(parse::<Config>(yaml).is_err());
    }
}
