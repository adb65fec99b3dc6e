use crate::error::{GraphError, Result};
use crate::selection::{self, Selection};
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableUnGraph;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info, warn};
use wayfinder_config::LabelsConfig;
use wayfinder_core::{DataSource, Dataset, EdgeRecord, NodeRecord};

/// Structural type given to nodes whose record has none.
pub const DEFAULT_NODE_TYPE: &str = "regular";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub floor: u32,
    pub node_type: String, // "staircase", "elevator", "regular", ...
    /// Effective label: the record label, joined with the person name if both exist.
    pub label: Option<String>,
}

/// The base building graph plus its lookup indices.
///
/// Built once from a [`DataSource`] and never mutated afterwards; routing
/// requests work on [`crate::view::GraphView`]s derived from it.
#[derive(Debug, Serialize, Deserialize)]
pub struct NavGraph {
    graph: StableUnGraph<NavNode, f64>,
    node_indices: HashMap<String, NodeIndex>,
    labels: HashMap<String, String>,
    categories: HashMap<String, Vec<String>>,
    /// Source and label settings the graph was built with; empty when built
    /// from a bare [`Dataset`].
    fingerprint: String,
    // Derived from node weights, rebuilt after a snapshot load
    #[serde(skip)]
    floor_index: BTreeMap<u32, Vec<NodeIndex>>,
    #[serde(skip)]
    type_index: HashMap<String, Vec<NodeIndex>>,
}

impl NavGraph {
    fn empty() -> Self {
        Self {
            graph: StableUnGraph::default(),
            node_indices: HashMap::new(),
            labels: HashMap::new(),
            categories: HashMap::new(),
            fingerprint: String::new(),
            floor_index: BTreeMap::new(),
            type_index: HashMap::new(),
        }
    }

    /// Read the source once and build the graph. Any read failure or broken
    /// record aborts the build; there is no partial graph.
    pub fn from_source(source: &dyn DataSource, labels: &LabelsConfig) -> Result<Self> {
        info!(source = %source.describe(), "loading building dataset");
        let dataset = source.load()?;
        let mut nav = Self::build(dataset, labels)?;
        nav.fingerprint = fingerprint(source, labels);
        Ok(nav)
    }

    /// Whether this graph was built from `source` with the same label settings.
    pub fn matches(&self, source: &dyn DataSource, labels: &LabelsConfig) -> bool {
        self.fingerprint == fingerprint(source, labels)
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn build(dataset: Dataset, labels: &LabelsConfig) -> Result<Self> {
        let mut nav = Self::empty();
        for record in dataset.nodes {
            nav.add_node(record, &labels.person_separator)?;
        }
        for record in dataset.edges {
            nav.add_edge(record)?;
        }
        nav.rebuild_indices();

        info!(
            nodes = nav.node_count(),
            edges = nav.edge_count(),
            labels = nav.labels.len(),
            categories = nav.categories.len(),
            "built navigation graph"
        );
        Ok(nav)
    }

    fn add_node(&mut self, record: NodeRecord, person_separator: &str) -> Result<()> {
        if self.node_indices.contains_key(&record.id) {
            return Err(GraphError::DuplicateNode(record.id));
        }
        if record.floor == 0 {
            return Err(GraphError::InvalidFloor {
                id: record.id,
                floor: record.floor,
            });
        }

        let label = match (record.label, record.person) {
            (Some(label), Some(person)) => Some(format!("{label}{person_separator}{person}")),
            (label, _) => label,
        };

        if let Some(label) = &label {
            if let Some(previous) = self.labels.insert(label.clone(), record.id.clone()) {
                warn!(label = %label, previous = %previous, now = %record.id, "label reused; later node wins");
            }
        }
        if let Some(node_type) = &record.node_type {
            self.categories
                .entry(capitalize(node_type))
                .or_default()
                .push(record.id.clone());
        }

        let id = record.id.clone();
        let idx = self.graph.add_node(NavNode {
            id: record.id,
            x: record.x,
            y: record.y,
            floor: record.floor,
            node_type: record
                .node_type
                .unwrap_or_else(|| DEFAULT_NODE_TYPE.to_string()),
            label,
        });
        self.node_indices.insert(id, idx);
        Ok(())
    }

    fn add_edge(&mut self, record: EdgeRecord) -> Result<()> {
        if !record.weight.is_finite() || record.weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: record.from,
                to: record.to,
                weight: record.weight,
            });
        }

        let endpoint = |id: &str| {
            self.node_indices
                .get(id)
                .copied()
                .ok_or_else(|| GraphError::UnknownEndpoint {
                    from: record.from.clone(),
                    to: record.to.clone(),
                    missing: id.to_string(),
                })
        };
        let src = endpoint(&record.from)?;
        let dst = endpoint(&record.to)?;

        // Simple graph: a repeated pair keeps the last weight
        match self.graph.find_edge(src, dst) {
            Some(edge) => {
                debug!(from = %record.from, to = %record.to, weight = record.weight, "replacing edge weight");
                self.graph[edge] = record.weight;
            }
            None => {
                self.graph.add_edge(src, dst, record.weight);
            }
        }
        Ok(())
    }

    fn rebuild_indices(&mut self) {
        self.floor_index.clear();
        self.type_index.clear();
        for idx in self.graph.node_indices() {
            let node = &self.graph[idx];
            self.floor_index.entry(node.floor).or_default().push(idx);
            self.type_index
                .entry(node.node_type.to_lowercase())
                .or_default()
                .push(idx);
        }
    }

    /// Load a graph cached by [`NavGraph::save_snapshot`].
    pub fn load_snapshot(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| GraphError::SnapshotIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut nav: NavGraph = bincode::deserialize_from(BufReader::new(file)).map_err(
            |source| GraphError::SnapshotCodec {
                path: path.to_path_buf(),
                source,
            },
        )?;
        nav.rebuild_indices();
        info!(path = %path.display(), nodes = nav.node_count(), "loaded graph snapshot");
        Ok(nav)
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        let io_err = |source| GraphError::SnapshotIo {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let file = File::create(path).map_err(io_err)?;
        bincode::serialize_into(BufWriter::new(file), self).map_err(|source| {
            GraphError::SnapshotCodec {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(path = %path.display(), "wrote graph snapshot");
        Ok(())
    }

    pub fn resolve(&self, selection: &str) -> Selection {
        selection::resolve(selection, &self.labels, &self.categories)
    }

    /// Floor of the first candidate, which is where a search from this
    /// selection is shown as starting.
    pub fn selection_floor(&self, selection: &Selection) -> Option<u32> {
        selection
            .candidates()
            .first()
            .and_then(|id| self.floor(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&NavNode> {
        self.node_indices.get(id).map(|idx| &self.graph[*idx])
    }

    pub fn position(&self, id: &str) -> Option<(f64, f64)> {
        self.node(id).map(|n| (n.x, n.y))
    }

    pub fn floor(&self, id: &str) -> Option<u32> {
        self.node(id).map(|n| n.floor)
    }

    pub fn node_type(&self, id: &str) -> Option<&str> {
        self.node(id).map(|n| n.node_type.as_str())
    }

    pub fn label_of(&self, id: &str) -> Option<&str> {
        self.node(id).and_then(|n| n.label.as_deref())
    }

    /// Effective label → node id.
    pub fn labels(&self) -> &HashMap<String, String> {
        &self.labels
    }

    /// Capitalized type → node ids in source order.
    pub fn categories(&self) -> &HashMap<String, Vec<String>> {
        &self.categories
    }

    /// Weight of the edge joining `a` and `b`, in either direction.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Floors that have at least one node, ascending.
    pub fn floors(&self) -> Vec<u32> {
        self.floor_index.keys().copied().collect()
    }

    /// Everything a user can pick as an origin or destination: sorted labels
    /// followed by sorted category names.
    pub fn selectable_points(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.labels.keys().cloned().collect();
        labels.sort();
        let mut categories: Vec<String> = self.categories.keys().cloned().collect();
        categories.sort();
        labels.extend(categories);
        labels
    }

    pub(crate) fn inner(&self) -> &StableUnGraph<NavNode, f64> {
        &self.graph
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    pub(crate) fn all_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub(crate) fn floor_members(&self, floor: u32) -> &[NodeIndex] {
        self.floor_index
            .get(&floor)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Nodes whose type equals `lower_type` case-insensitively.
    pub(crate) fn type_members(&self, lower_type: &str) -> &[NodeIndex] {
        self.type_index
            .get(lower_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// First character upper-cased, the rest lower-cased.
fn fingerprint(source: &dyn DataSource, labels: &LabelsConfig) -> String {
    format!(
        "{}\u{1f}person_separator={:?}",
        source.describe(),
        labels.person_separator
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
