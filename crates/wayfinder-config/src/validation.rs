//! Validation trait and shared checks for configuration types

use crate::error::{ConfigError, Result};

/// Trait for validating configuration values
///
/// Implement this for any config type that needs validation beyond
/// type-level checks.
pub trait Validate {
    /// Returns `Ok(())` if validation passes, or a `ConfigError` describing
    /// what failed and why.
    fn validate(&self) -> Result<()>;
}

/// Check that a list of names is non-empty and has no blank entries
pub fn validate_name_list(field: impl Into<String>, names: &[String]) -> Result<()> {
    let field = field.into();
    if names.is_empty() {
        return Err(ConfigError::ValidationError {
            field,
            message: "Must list at least one entry".to_string(),
        });
    }
    if names.iter().any(|n| n.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            field,
            message: "Entries cannot be empty strings".to_string(),
        });
    }
    Ok(())
}

/// Check that two lists share no entries, comparing case-insensitively
pub fn validate_disjoint(
    field: impl Into<String>,
    names: &[String],
    other_field: impl Into<String>,
    other: &[String],
) -> Result<()> {
    let shared: Vec<String> = names
        .iter()
        .map(|n| n.to_lowercase())
        .filter(|n| other.iter().any(|o| o.to_lowercase() == *n))
        .collect();

    if !shared.is_empty() {
        return Err(ConfigError::OverlappingSets {
            field: field.into(),
            other: other_field.into(),
            shared: shared.join(", "),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_name_list_valid() {
        assert!(validate_name_list("test", &names(&["stairs"])).is_ok());
    }

    #[test]
    fn test_name_list_empty_invalid() {
        assert!(validate_name_list("test", &[]).is_err());
        assert!(validate_name_list("test", &names(&["  "])).is_err());
    }

    #[test]
    fn test_disjoint_valid() {
        let a = names(&["staircase"]);
        let b = names(&["elevator"]);
        assert!(validate_disjoint("a", &a, "b", &b).is_ok());
    }

    #[test]
    fn test_disjoint_is_case_insensitive() {
        let a = names(&["Lift", "staircase"]);
        let b = names(&["lift"]);
        let err = validate_disjoint("a", &a, "b", &b).unwrap_err();
        assert!(err.to_string().contains("lift"));
    }
}
