//! Configuration merging logic
//!
//! Every source contributes a [`ConfigLayer`] in which only the fields the
//! source actually set are `Some`. Layers are applied in precedence order,
//! each one overwriting exactly the fields it carries.

use crate::{types::*, Config};
use serde::Deserialize;
use std::path::PathBuf;

/// Partial configuration as read from one source
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub data: DataLayer,
    pub accessibility: AccessibilityLayer,
    pub labels: LabelsLayer,
    pub routing: RoutingLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataLayer {
    pub source: Option<SourceKind>,
    pub path: Option<PathBuf>,
    pub nodes_file: Option<String>,
    pub edges_file: Option<String>,
    pub delimiter: Option<char>,
    pub snapshot_path: Option<PathBuf>,
    pub use_snapshot: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccessibilityLayer {
    pub staircase_types: Option<Vec<String>>,
    pub elevator_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelsLayer {
    pub person_separator: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoutingLayer {
    pub default_wheelchair: Option<bool>,
}

impl ConfigLayer {
    /// Overwrite the fields of `base` this layer sets
    pub fn apply(self, mut base: Config) -> Config {
        self.data.apply(&mut base.data);
        self.accessibility.apply(&mut base.accessibility);
        self.labels.apply(&mut base.labels);
        self.routing.apply(&mut base.routing);
        base
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl DataLayer {
    fn apply(self, config: &mut DataConfig) {
        set(&mut config.source, self.source);
        set(&mut config.path, self.path);
        set(&mut config.nodes_file, self.nodes_file);
        set(&mut config.edges_file, self.edges_file);
        set(&mut config.delimiter, self.delimiter);
        set(&mut config.snapshot_path, self.snapshot_path);
        set(&mut config.use_snapshot, self.use_snapshot);
    }
}

impl AccessibilityLayer {
    fn apply(self, config: &mut AccessibilityConfig) {
        set(&mut config.staircase_types, self.staircase_types);
        set(&mut config.elevator_types, self.elevator_types);
    }
}

impl LabelsLayer {
    fn apply(self, config: &mut LabelsConfig) {
        set(&mut config.person_separator, self.person_separator);
    }
}

impl RoutingLayer {
    fn apply(self, config: &mut RoutingConfig) {
        set(&mut config.default_wheelchair, self.default_wheelchair);
    }
}

/// A complete config as a layer that sets every field
impl From<Config> for ConfigLayer {
    fn from(config: Config) -> Self {
        let Config {
            data,
            accessibility,
            labels,
            routing,
        } = config;
        Self {
            data: DataLayer {
                source: Some(data.source),
                path: Some(data.path),
                nodes_file: Some(data.nodes_file),
                edges_file: Some(data.edges_file),
                delimiter: Some(data.delimiter),
                snapshot_path: Some(data.snapshot_path),
                use_snapshot: Some(data.use_snapshot),
            },
            accessibility: AccessibilityLayer {
                staircase_types: Some(accessibility.staircase_types),
                elevator_types: Some(accessibility.elevator_types),
            },
            labels: LabelsLayer {
                person_separator: Some(labels.person_separator),
            },
            routing: RoutingLayer {
                default_wheelchair: Some(routing.default_wheelchair),
            },
        }
    }
}

/// Merge two configurations, with every field of `overlay` taking precedence
pub fn merge(base: Config, overlay: ConfigLayer) -> Config {
    overlay.apply(base)
}
