//! Dataset source and snapshot configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dataset location and graph snapshot settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Tabular format of the dataset
    #[serde(default)]
    pub source: SourceKind,

    /// Dataset location: a directory for `csv`, a file for `json`
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Node table file name inside `path` (csv only)
    #[serde(default = "default_nodes_file")]
    pub nodes_file: String,

    /// Edge table file name inside `path` (csv only)
    #[serde(default = "default_edges_file")]
    pub edges_file: String,

    /// Field separator of both tables (csv only)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Where the built graph is cached between runs
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Reuse the cached snapshot instead of re-reading the dataset
    #[serde(default = "default_use_snapshot")]
    pub use_snapshot: bool,
}

/// Supported dataset formats
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// `nodes.csv` + `edges.csv` with header rows
    #[default]
    Csv,
    /// One JSON document with `nodes` and `edges` arrays
    Json,
}

impl SourceKind {
    pub const NAMES: [&'static str; 2] = ["csv", "json"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "csv" => Some(SourceKind::Csv),
            "json" => Some(SourceKind::Json),
            _ => None,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            path: default_path(),
            nodes_file: default_nodes_file(),
            edges_file: default_edges_file(),
            delimiter: default_delimiter(),
            snapshot_path: default_snapshot_path(),
            use_snapshot: default_use_snapshot(),
        }
    }
}

impl DataConfig {
    pub fn nodes_path(&self) -> PathBuf {
        self.path.join(&self.nodes_file)
    }

    pub fn edges_path(&self) -> PathBuf {
        self.path.join(&self.edges_file)
    }
}

impl crate::validation::Validate for DataConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;

        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "data.path".to_string(),
                message: "Dataset path cannot be empty".to_string(),
            });
        }

        if self.source == SourceKind::Csv {
            for (field, name) in [
                ("data.nodes_file", &self.nodes_file),
                ("data.edges_file", &self.edges_file),
            ] {
                if name.trim().is_empty() {
                    return Err(ConfigError::ValidationError {
                        field: field.to_string(),
                        message: "CSV sources need both table file names".to_string(),
                    });
                }
            }
        }

        if !self.delimiter.is_ascii() || self.delimiter == '"' || self.delimiter == '\n' {
            return Err(ConfigError::ValidationError {
                field: "data.delimiter".to_string(),
                message: format!(
                    "Delimiter must be a single ASCII character other than a quote or newline, got {:?}",
                    self.delimiter
                ),
            });
        }

        if self.use_snapshot && self.snapshot_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "data.snapshot_path".to_string(),
                message: "Snapshot caching is enabled but no path is set".to_string(),
            });
        }

        Ok(())
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("data")
}

fn default_nodes_file() -> String {
    "nodes.csv".to_string()
}

fn default_edges_file() -> String {
    "edges.csv".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(".wayfinder").join("graph.bin")
}

fn default_use_snapshot() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = DataConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.nodes_path(), PathBuf::from("data/nodes.csv"));
    }

    #[test]
    fn test_csv_requires_table_names() {
        let config = DataConfig {
            edges_file: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_delimiter_must_be_ascii() {
        let semicolon = DataConfig {
            delimiter: ';',
            ..Default::default()
        };
        assert!(semicolon.validate().is_ok());

        let wide = DataConfig {
            delimiter: '§',
            ..Default::default()
        };
        assert!(wide.validate().is_err());
    }

    #[test]
    fn test_json_ignores_table_names() {
        let config = DataConfig {
            source: SourceKind::Json,
            path: PathBuf::from("building.json"),
            nodes_file: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_kind_serialization() {
        assert_eq!(serde_json::to_string(&SourceKind::Csv).unwrap(), "\"csv\"");
        assert_eq!(SourceKind::parse("JSON"), Some(SourceKind::Json));
        assert_eq!(SourceKind::parse("sqlite"), None);
    }
}
