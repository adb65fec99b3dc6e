//! TOML format parser

use crate::{error::ConfigError, Result};
use serde::de::DeserializeOwned;

/// Parse configuration from TOML string
pub fn parse<T: DeserializeOwned>(content: &str) -> Result<T> {
    parse_with_path(content, None)
}

/// Parse configuration from TOML string with file path for better errors
pub fn parse_with_path<T: DeserializeOwned>(content: &str, path: Option<&str>) -> Result<T> {
    ::toml::from_str(content).map_err(|e| ConfigError::from_toml_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::SourceKind;

    #[test]
    fn test_parse_minimal_toml() {
        let toml = r#"
[data]
source = "json"
path = "building.json"
"#;
        let config: Config = parse(toml).unwrap();
        assert_eq!(config.data.source, SourceKind::Json);
        assert_eq!(config.data.path.to_str(), Some("building.json"));
    }

    #[test]
    fn test_parse_error_has_context() {
        let toml = "[labels]\nperson_separator = \n";
        match parse_with_path::<Config>(toml, Some("cfg.toml")) {
            Err(ConfigError::TomlError { location, .. }) => assert_eq!(location, " in cfg.toml"),
            other => panic!("expected toml error, got {other:?}"),
        }
    }
}
