use std::path::PathBuf;
use thiserror::Error;
use wayfinder_core::DataError;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("duplicate node id '{0}'")]
    DuplicateNode(String),

    #[error("node '{id}' is on floor {floor}; floors start at 1")]
    InvalidFloor { id: String, floor: u32 },

    #[error("edge {from} -> {to} references unknown node '{missing}'")]
    UnknownEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("'{from}' and '{to}' are not adjacent")]
    NotAdjacent { from: String, to: String },

    #[error("failed to access snapshot {path}: {source}")]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode or decode snapshot {path}: {source}")]
    SnapshotCodec {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}
