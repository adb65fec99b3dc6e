use crate::graph::NavGraph;
use crate::view::accessibility_view;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, trace};
use wayfinder_config::AccessibilityConfig;

/// An ordered node sequence and the summed weight of its edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub nodes: Vec<String>,
    pub total_weight: f64,
}

impl Route {
    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn goal(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Floors visited in order, with consecutive repeats collapsed.
    pub fn floors(&self, graph: &NavGraph) -> Vec<u32> {
        self.nodes
            .iter()
            .filter_map(|id| graph.floor(id))
            .dedup()
            .collect()
    }

    /// True when the route continues past the floor it starts on.
    pub fn changes_floor(&self, graph: &NavGraph) -> bool {
        self.floors(graph).len() > 1
    }

    /// True when the route visits `floor` and its last node there is not the
    /// goal, i.e. a walker on that floor still has more route elsewhere.
    pub fn continues_after_floor(&self, graph: &NavGraph, floor: u32) -> bool {
        self.nodes
            .iter()
            .rposition(|id| graph.floor(id) == Some(floor))
            .is_some_and(|last| last + 1 < self.nodes.len())
    }
}

/// Picks the cheapest route over every (start, target) pairing.
pub struct PathFinder<'a> {
    graph: &'a NavGraph,
    accessibility: &'a AccessibilityConfig,
}

impl<'a> PathFinder<'a> {
    pub fn new(graph: &'a NavGraph, accessibility: &'a AccessibilityConfig) -> Self {
        Self {
            graph,
            accessibility,
        }
    }

    /// Best route from any of `starts` to any of `targets`.
    ///
    /// Each pair is searched in the accessibility view for `wheelchair`,
    /// narrowed to a single floor when both ends share one. Pairs are tried
    /// with starts in the outer loop; on equal weight the earlier pair wins.
    /// Returns `None` when no pair is connected.
    pub fn find_best_path(
        &self,
        starts: &[String],
        targets: &[String],
        wheelchair: bool,
    ) -> Option<Route> {
        let view = accessibility_view(self.graph, wheelchair, self.accessibility);
        let mut best: Option<Route> = None;

        for (start, target) in starts.iter().cartesian_product(targets) {
            let Some(route) = view.restrict_to_floor(start, target).shortest_path(start, target)
            else {
                trace!(%start, %target, "pair not connected");
                continue;
            };
            if best
                .as_ref()
                .map_or(true, |b| route.total_weight < b.total_weight)
            {
                best = Some(route);
            }
        }

        debug!(
            starts = starts.len(),
            targets = targets.len(),
            wheelchair,
            found = best.is_some(),
            "searched candidate pairs"
        );
        best
    }
}
