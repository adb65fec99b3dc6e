//! Display label configuration

use serde::{Deserialize, Serialize};

/// How a node's effective label is composed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Placed between a node's label and its person name when both are present.
    /// Empty by default, so the two are simply concatenated.
    #[serde(default = "default_person_separator")]
    pub person_separator: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            person_separator: default_person_separator(),
        }
    }
}

impl crate::validation::Validate for LabelsConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;

        if self.person_separator.contains(['\n', '\r']) {
            return Err(ConfigError::ValidationError {
                field: "labels.person_separator".to_string(),
                message: "Separator must stay on one line".to_string(),
            });
        }
        Ok(())
    }
}

fn default_person_separator() -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = LabelsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.person_separator, "");
    }

    #[test]
    fn test_multiline_separator_invalid() {
        let config = LabelsConfig {
            person_separator: "\n".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
