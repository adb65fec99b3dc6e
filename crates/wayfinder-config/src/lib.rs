//! Configuration management for wayfinder
//!
//! This crate provides a validated configuration system with support for:
//! - Multiple formats (YAML, TOML, JSON)
//! - Config validation with helpful error messages
//! - Layered merging (file + environment + explicit overrides), field by field
//! - Type-safe configuration structs
//!
//! # Example
//!
//! ```no_run
//! use wayfinder_config::Config;
//!
//! // Load from default location (.wayfinder.{toml,yml,yaml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let wheelchair = config.routing.default_wheelchair;
//! let stairs = &config.accessibility.staircase_types;
//! # Ok::<(), wayfinder_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::{merge::ConfigLayer, ConfigBuilder};
pub use types::*;

/// Trait for config validation
pub use validation::Validate;
