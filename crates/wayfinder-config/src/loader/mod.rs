//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

use crate::{Config, Result, Validate};
use merge::ConfigLayer;
use std::path::{Path, PathBuf};

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Load from a file
    File(PathBuf),
    /// Load from environment variables
    Environment,
    /// Explicit overrides (for programmatic use)
    Explicit(ConfigLayer),
}

/// Builder for loading and merging configurations
///
/// Supports layered configuration with proper precedence:
/// defaults < file < environment < explicit overrides
///
/// # Example
///
/// ```no_run
/// use wayfinder_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".wayfinder.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), wayfinder_config::error::ConfigError>(())
/// ```
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    /// Create a new config builder starting with defaults
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Add environment variable overlay
    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    /// Add a complete config that replaces every earlier value
    pub fn with_config(mut self, config: Config) -> Self {
        self.sources.push(ConfigSource::Explicit(config.into()));
        self
    }

    /// Add explicit overrides for just the fields set in `layer`
    pub fn with_overrides(mut self, layer: ConfigLayer) -> Self {
        self.sources.push(ConfigSource::Explicit(layer));
        self
    }

    /// Build and validate the final configuration
    ///
    /// Merges all sources in order, with later sources taking precedence.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            match source {
                ConfigSource::File(path) => {
                    config = merge::merge(config, file::load_layer(&path)?);
                }
                ConfigSource::Environment => {
                    if let Some(env_layer) = env::from_env()? {
                        config = merge::merge(config, env_layer);
                    }
                }
                ConfigSource::Explicit(layer) => {
                    config = merge::merge(config, layer);
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// File names tried by [`Config::load`], in order
pub const DEFAULT_PATHS: [&str; 4] = [
    ".wayfinder.toml",
    ".wayfinder.yml",
    ".wayfinder.yaml",
    ".wayfinder.json",
];

impl Config {
    /// Load configuration from default locations
    ///
    /// Uses the first file from [`DEFAULT_PATHS`] that exists in the current
    /// directory, falling back to defaults. Environment overlays always apply.
    pub fn load() -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = DEFAULT_PATHS.iter().find(|p| Path::new(p).exists()) {
            builder = builder.with_file(path);
        }

        builder.with_env().build()
    }

    /// Load configuration from a specific file
    ///
    /// Also applies environment variable overlays.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::fs;

    #[test]
    fn test_builder_default() {
        let config = ConfigBuilder::new().build().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_then_explicit_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wayfinder.toml");
        fs::write(
            &path,
            "[labels]\nperson_separator = \" - \"\n[routing]\ndefault_wheelchair = true\n",
        )
        .unwrap();

        let mut overrides = ConfigLayer::default();
        overrides.labels.person_separator = Some(": ".to_string());

        let config = ConfigBuilder::new()
            .with_file(&path)
            .with_overrides(overrides)
            .build()
            .unwrap();

        assert_eq!(config.labels.person_separator, ": ");
        assert!(config.routing.default_wheelchair);
    }

    #[test]
    fn test_explicit_layer_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wayfinder.toml");
        fs::write(
            &path,
            "[data]\nuse_snapshot = false\n[routing]\ndefault_wheelchair = true\n",
        )
        .unwrap();

        let mut overrides = ConfigLayer::default();
        overrides.routing.default_wheelchair = Some(false);
        overrides.data.use_snapshot = Some(true);

        let config = ConfigBuilder::new()
            .with_file(&path)
            .with_overrides(overrides)
            .build()
            .unwrap();
        assert!(!config.routing.default_wheelchair);
        assert!(config.data.use_snapshot);

        // A complete config replaces the file's values wholesale
        let config = ConfigBuilder::new()
            .with_file(&path)
            .with_config(Config::default())
            .build()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = ConfigBuilder::new()
            .with_file("/nonexistent/wayfinder.toml")
            .build();
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_invalid_merged_config_rejected() {
        let mut explicit = Config::default();
        explicit.accessibility.elevator_types = vec!["staircase".to_string()];
        assert!(ConfigBuilder::new().with_config(explicit).build().is_err());
    }
}
