use crate::graph::NavGraph;
use crate::path::Route;
use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use petgraph::visit::{EdgeRef, NodeFiltered};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;
use wayfinder_config::AccessibilityConfig;

/// A node-induced subgraph of a [`NavGraph`].
///
/// Views only record which nodes survive; edges are whatever the base graph
/// has between two surviving nodes. Building one never touches the base.
#[derive(Debug, Clone)]
pub struct GraphView<'g> {
    graph: &'g NavGraph,
    members: HashSet<NodeIndex>,
}

/// The base graph minus nodes of the type the mobility mode cannot use:
/// staircases for wheelchair users, elevators otherwise.
pub fn accessibility_view<'g>(
    graph: &'g NavGraph,
    wheelchair: bool,
    accessibility: &AccessibilityConfig,
) -> GraphView<'g> {
    GraphView::full(graph).apply_accessibility(wheelchair, accessibility)
}

impl<'g> GraphView<'g> {
    pub fn full(graph: &'g NavGraph) -> Self {
        Self {
            graph,
            members: graph.all_indices().collect(),
        }
    }

    pub fn apply_accessibility(&self, wheelchair: bool, accessibility: &AccessibilityConfig) -> Self {
        self.without_types(&accessibility.forbidden_types(wheelchair))
    }

    /// Drop every node whose type matches one of `types`, ignoring case.
    pub fn without_types(&self, types: &[String]) -> Self {
        let mut members = self.members.clone();
        for node_type in types {
            for idx in self.graph.type_members(&node_type.to_lowercase()) {
                members.remove(idx);
            }
        }
        debug!(
            before = self.members.len(),
            after = members.len(),
            "filtered view by node type"
        );
        Self {
            graph: self.graph,
            members,
        }
    }

    /// Nodes of this view that sit on `floor`.
    pub fn on_floor(&self, floor: u32) -> Self {
        let members = self
            .graph
            .floor_members(floor)
            .iter()
            .filter(|idx| self.members.contains(*idx))
            .copied()
            .collect();
        Self {
            graph: self.graph,
            members,
        }
    }

    /// When `a` and `b` sit on the same floor, keep only that floor's nodes.
    /// Otherwise the view is returned unchanged.
    ///
    /// Floors come from the base graph, so this works even if `a` or `b`
    /// was filtered out of the view.
    pub fn restrict_to_floor(&self, a: &str, b: &str) -> Self {
        match (self.graph.floor(a), self.graph.floor(b)) {
            (Some(fa), Some(fb)) if fa == fb => self.on_floor(fa),
            _ => self.clone(),
        }
    }

    pub fn base(&self) -> &'g NavGraph {
        self.graph
    }

    pub fn contains(&self, id: &str) -> bool {
        self.graph
            .index_of(id)
            .is_some_and(|idx| self.members.contains(&idx))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn node_ids(&self) -> BTreeSet<String> {
        let inner = self.graph.inner();
        self.members.iter().map(|idx| inner[*idx].id.clone()).collect()
    }

    /// Minimum-weight path between two nodes of this view.
    ///
    /// `None` when either endpoint is outside the view or no path exists.
    /// A node is trivially reachable from itself at weight 0.
    pub fn shortest_path(&self, from: &str, to: &str) -> Option<Route> {
        let start = self.graph.index_of(from)?;
        let goal = self.graph.index_of(to)?;
        if !self.members.contains(&start) || !self.members.contains(&goal) {
            return None;
        }

        let inner = self.graph.inner();
        let filtered = NodeFiltered::from_fn(inner, |n| self.members.contains(&n));
        let (total_weight, indices) =
            astar(&filtered, start, |n| n == goal, |e| *e.weight(), |_| 0.0)?;

        Some(Route {
            nodes: indices.into_iter().map(|idx| inner[idx].id.clone()).collect(),
            total_weight,
        })
    }
}
