pub mod error;
pub mod models;
pub mod source;

pub use error::DataError;
pub use models::{Dataset, EdgeRecord, NodeRecord};
pub use source::{open_source, CsvSource, DataSource, JsonSource, MemorySource};
