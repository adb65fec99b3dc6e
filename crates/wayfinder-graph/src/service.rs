use crate::error::Result;
use crate::estimate::estimate;
use crate::graph::NavGraph;
use crate::path::PathFinder;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};
use wayfinder_config::Config;
use wayfinder_core::{open_source, DataSource};

/// A found route with its distance and time estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub path: Vec<String>,
    pub total_weight: f64,
    pub distance_meters: u64,
    pub estimated_minutes: u64,
    pub start_floor: u32,
    /// Floors visited in order, consecutive repeats collapsed.
    pub floors: Vec<u32>,
}

impl RouteSummary {
    pub fn changes_floor(&self) -> bool {
        self.floors.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(RouteSummary),
    NoPath,
    UnresolvedStart { selection: String },
    UnresolvedTarget { selection: String },
}

/// Owns the building graph and answers routing requests against it.
///
/// The graph is built once and shared read-only. [`NavService::reload`]
/// swaps in a freshly built graph; requests already holding the previous
/// one finish against it.
pub struct NavService {
    source: Box<dyn DataSource>,
    config: Config,
    graph: RwLock<Arc<NavGraph>>,
}

impl NavService {
    /// Build from the configured source, reusing the snapshot when allowed
    /// and when it was built from the same source and label settings.
    pub fn open(config: Config) -> Result<Self> {
        let source = open_source(&config.data);
        let snapshot = &config.data.snapshot_path;

        let graph = if config.data.use_snapshot && snapshot.exists() {
            match NavGraph::load_snapshot(snapshot) {
                Ok(graph) if graph.matches(source.as_ref(), &config.labels) => graph,
                Ok(graph) => {
                    info!(
                        cached = %graph.fingerprint(),
                        source = %source.describe(),
                        "snapshot built from other settings; rebuilding"
                    );
                    Self::build_and_cache(source.as_ref(), &config)?
                }
                Err(e) => {
                    warn!(error = %e, "snapshot unusable; rebuilding from source");
                    Self::build_and_cache(source.as_ref(), &config)?
                }
            }
        } else {
            Self::build_and_cache(source.as_ref(), &config)?
        };

        Ok(Self {
            source,
            config,
            graph: RwLock::new(Arc::new(graph)),
        })
    }

    /// Build straight from `source`; the snapshot is never read.
    pub fn with_source(source: Box<dyn DataSource>, config: Config) -> Result<Self> {
        let graph = NavGraph::from_source(source.as_ref(), &config.labels)?;
        Ok(Self {
            source,
            config,
            graph: RwLock::new(Arc::new(graph)),
        })
    }

    fn build_and_cache(source: &dyn DataSource, config: &Config) -> Result<NavGraph> {
        let graph = NavGraph::from_source(source, &config.labels)?;
        if config.data.use_snapshot {
            if let Err(e) = graph.save_snapshot(&config.data.snapshot_path) {
                warn!(error = %e, "could not cache graph snapshot");
            }
        }
        Ok(graph)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    /// The graph currently served.
    pub fn graph(&self) -> Arc<NavGraph> {
        let guard = self.graph.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Re-read the source and replace the served graph. On failure the old
    /// graph stays in place.
    pub fn reload(&self) -> Result<Arc<NavGraph>> {
        let fresh = Arc::new(Self::build_and_cache(self.source.as_ref(), &self.config)?);
        let mut guard = self.graph.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        info!(nodes = fresh.node_count(), "reloaded navigation graph");
        Ok(fresh)
    }

    pub fn points(&self) -> Vec<String> {
        self.graph().selectable_points()
    }

    /// Resolve both selections, search, and estimate.
    pub fn route(&self, from: &str, to: &str, wheelchair: bool) -> Result<RouteOutcome> {
        let graph = self.graph();

        let starts = graph.resolve(from);
        if !starts.is_resolved() {
            return Ok(RouteOutcome::UnresolvedStart {
                selection: from.to_string(),
            });
        }
        let targets = graph.resolve(to);
        if !targets.is_resolved() {
            return Ok(RouteOutcome::UnresolvedTarget {
                selection: to.to_string(),
            });
        }

        let finder = PathFinder::new(&graph, &self.config.accessibility);
        let Some(route) =
            finder.find_best_path(starts.candidates(), targets.candidates(), wheelchair)
        else {
            info!(%from, %to, wheelchair, "no route");
            return Ok(RouteOutcome::NoPath);
        };

        let estimate = estimate(&graph, &route.nodes)?;
        let floors = route.floors(&graph);
        let start_floor = floors.first().copied().unwrap_or_default();
        info!(
            %from,
            %to,
            wheelchair,
            hops = route.nodes.len(),
            meters = estimate.distance_meters,
            "route found"
        );

        Ok(RouteOutcome::Found(RouteSummary {
            path: route.nodes,
            total_weight: estimate.total_weight,
            distance_meters: estimate.distance_meters,
            estimated_minutes: estimate.minutes,
            start_floor,
            floors,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::{Dataset, EdgeRecord, MemorySource, NodeRecord};

    fn service() -> NavService {
        let data = Dataset {
            nodes: vec![
                NodeRecord::new("a", 0.0, 0.0, 1).with_label("Lobby"),
                NodeRecord::new("b", 0.0, 0.0, 1).with_type("toilet"),
            ],
            edges: vec![EdgeRecord::new("a", "b", 7.0)],
        };
        NavService::with_source(Box::new(MemorySource::new(data)), Config::default()).unwrap()
    }

    #[test]
    fn test_route_found() {
        let svc = service();
        let RouteOutcome::Found(summary) = svc.route("Lobby", "Toilet", false).unwrap() else {
            panic!("expected a route");
        };
        assert_eq!(summary.path, vec!["a", "b"]);
        assert_eq!(summary.distance_meters, 2);
        assert_eq!(summary.start_floor, 1);
        assert!(!summary.changes_floor());
    }

    #[test]
    fn test_unresolved_selections() {
        let svc = service();
        assert_eq!(
            svc.route("Nowhere", "Toilet", false).unwrap(),
            RouteOutcome::UnresolvedStart {
                selection: "Nowhere".to_string()
            }
        );
        assert_eq!(
            svc.route("Lobby", "toilet", false).unwrap(),
            RouteOutcome::UnresolvedTarget {
                selection: "toilet".to_string()
            }
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(RouteOutcome::NoPath).unwrap();
        assert_eq!(json["status"], "no_path");
    }
}
