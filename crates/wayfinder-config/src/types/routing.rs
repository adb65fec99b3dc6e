//! Routing request defaults

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Mobility mode used when a request does not say
    #[serde(default)]
    pub default_wheelchair: bool,
}

impl crate::validation::Validate for RoutingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        Ok(())
    }
}
