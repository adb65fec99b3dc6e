//! Mobility-mode configuration

use serde::{Deserialize, Serialize};

/// Structural node types that each mobility mode refuses to traverse.
///
/// Wheelchair routing drops staircase nodes; default routing drops elevator
/// nodes. Both lists are compared case-insensitively against a node's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityConfig {
    /// Synonyms for a staircase node type
    #[serde(default = "default_staircase_types")]
    pub staircase_types: Vec<String>,

    /// Synonyms for an elevator node type
    #[serde(default = "default_elevator_types")]
    pub elevator_types: Vec<String>,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            staircase_types: default_staircase_types(),
            elevator_types: default_elevator_types(),
        }
    }
}

impl AccessibilityConfig {
    /// Lower-cased types excluded for the given mode
    pub fn forbidden_types(&self, wheelchair: bool) -> Vec<String> {
        let source = if wheelchair {
            &self.staircase_types
        } else {
            &self.elevator_types
        };
        source.iter().map(|t| t.to_lowercase()).collect()
    }
}

impl crate::validation::Validate for AccessibilityConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::{validate_disjoint, validate_name_list};

        validate_name_list("accessibility.staircase_types", &self.staircase_types)?;
        validate_name_list("accessibility.elevator_types", &self.elevator_types)?;
        validate_disjoint(
            "accessibility.staircase_types",
            &self.staircase_types,
            "accessibility.elevator_types",
            &self.elevator_types,
        )
    }
}

fn default_staircase_types() -> Vec<String> {
    vec!["лестница".to_string(), "staircase".to_string()]
}

fn default_elevator_types() -> Vec<String> {
    vec!["лифт".to_string(), "elevator".to_string()]
}
