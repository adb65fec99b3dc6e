use crate::error::DataError;
use crate::models::{Dataset, EdgeRecord, NodeRecord};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;
use wayfinder_config::{DataConfig, SourceKind};

/// Anything that can hand over the full node and edge tables in one read.
pub trait DataSource: Send + Sync {
    /// Human-readable location, used in logs and status output.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Dataset, DataError>;
}

/// Build the source described by the `data` config section.
pub fn open_source(config: &DataConfig) -> Box<dyn DataSource> {
    match config.source {
        // Validated as ASCII when the config was loaded
        SourceKind::Csv => Box::new(
            CsvSource::new(config.nodes_path(), config.edges_path())
                .with_delimiter(config.delimiter as u8),
        ),
        SourceKind::Json => Box::new(JsonSource::new(config.path.clone())),
    }
}

/// Two header-row CSV tables: `id,x,y,floor,type,label,person` and
/// `from,to,weight`. The `type`, `label` and `person` columns may be empty
/// or missing entirely.
pub struct CsvSource {
    nodes_path: PathBuf,
    edges_path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    pub fn new(nodes_path: impl Into<PathBuf>, edges_path: impl Into<PathBuf>) -> Self {
        Self {
            nodes_path: nodes_path.into(),
            edges_path: edges_path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn read_table<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>, DataError> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        rdr.deserialize()
            .collect::<Result<Vec<T>, _>>()
            .map_err(|source| DataError::Csv {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl DataSource for CsvSource {
    fn describe(&self) -> String {
        let mut described = format!(
            "csv:{} + {}",
            self.nodes_path.display(),
            self.edges_path.display()
        );
        if self.delimiter != b',' {
            described.push_str(&format!(" (delimiter {:?})", char::from(self.delimiter)));
        }
        described
    }

    fn load(&self) -> Result<Dataset, DataError> {
        let nodes: Vec<NodeRecord> = self.read_table(&self.nodes_path)?;
        let edges: Vec<EdgeRecord> = self.read_table(&self.edges_path)?;
        debug!(nodes = nodes.len(), edges = edges.len(), "read csv tables");
        Ok(Dataset { nodes, edges })
    }
}

/// A single JSON document: `{ "nodes": [...], "edges": [...] }`.
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for JsonSource {
    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }

    fn load(&self) -> Result<Dataset, DataError> {
        let file = File::open(&self.path).map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;
        let dataset: Dataset =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Json {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            nodes = dataset.nodes.len(),
            edges = dataset.edges.len(),
            "read json dataset"
        );
        Ok(dataset)
    }
}

/// Records already in memory; handy for tests and embedding callers.
pub struct MemorySource {
    dataset: Dataset,
}

impl MemorySource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DataSource for MemorySource {
    fn describe(&self) -> String {
        format!(
            "memory:{} nodes/{} edges",
            self.dataset.nodes.len(),
            self.dataset.edges.len()
        )
    }

    fn load(&self) -> Result<Dataset, DataError> {
        Ok(self.dataset.clone())
    }
}
