//! Configuration type definitions
//!
//! Each section is self-contained with validation and sensible defaults.

pub mod accessibility;
pub mod data;
pub mod labels;
pub mod routing;

pub use accessibility::AccessibilityConfig;
pub use data::{DataConfig, SourceKind};
pub use labels::LabelsConfig;
pub use routing::RoutingConfig;

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where node/edge records come from and where the graph snapshot lives
    #[serde(default)]
    pub data: DataConfig,

    /// Structural types forbidden per mobility mode
    #[serde(default)]
    pub accessibility: AccessibilityConfig,

    /// How display labels are derived from node records
    #[serde(default)]
    pub labels: LabelsConfig,

    /// Request defaults
    #[serde(default)]
    pub routing: RoutingConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.data.validate()?;
        self.accessibility.validate()?;
        self.labels.validate()?;
        self.routing.validate()?;
        Ok(())
    }
}
