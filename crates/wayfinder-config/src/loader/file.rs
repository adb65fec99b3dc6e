//! File-based configuration loading

use super::merge::ConfigLayer;
use crate::{error::ConfigError, loader::ConfigFormat, Config, Result, Validate};
use std::fs;
use std::path::Path;

/// Load a complete configuration from a file, defaults filling the gaps
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = load_layer(path)?.apply(Config::default());
    config.validate()?;
    Ok(config)
}

/// Read only the fields a file sets
pub fn load_layer<P: AsRef<Path>>(path: P) -> Result<ConfigLayer> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = detect_format(path)?;

    let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let path_str = path.to_str();

    match format {
        ConfigFormat::Yaml => super::formats::yaml::parse_with_path(&content, path_str),
        ConfigFormat::Toml => super::formats::toml::parse_with_path(&content, path_str),
        ConfigFormat::Json => super::formats::json::parse_with_path(&content, path_str),
    }
}

/// Detect configuration format from file extension
fn detect_format(path: &Path) -> Result<ConfigFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yml") | Some("yaml") => Ok(ConfigFormat::Yaml),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        _ => Err(ConfigError::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}
