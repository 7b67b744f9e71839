//! The sink seam between the load pipeline and its destination.

use std::path::PathBuf;

use osm_model::Record;

use crate::error::Result;
use crate::json::JsonArrayWriter;
use crate::store::DocumentStore;

/// Outcome of a finished sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkReport {
    /// Records accepted by the sink.
    pub records: usize,
    /// Human-readable destination (file path, or `path#collection`).
    pub destination: String,
}

/// Destination for built records.
///
/// Ownership of each record moves into the sink on `insert`.
pub trait RecordSink {
    fn insert(&mut self, record: Record) -> Result<()>;

    /// Flushes buffered records. Called once, after the last insert.
    fn finish(&mut self) -> Result<SinkReport>;
}

/// Selects and opens a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkConfig {
    /// One JSON array written after all records are built.
    JsonFile { path: PathBuf },
    /// Per-record inserts into a document collection.
    Store { path: PathBuf, collection: String },
}

impl SinkConfig {
    pub fn open(&self) -> Result<Box<dyn RecordSink>> {
        match self {
            Self::JsonFile { path } => Ok(Box::new(JsonArrayWriter::new(path.clone()))),
            Self::Store { path, collection } => {
                Ok(Box::new(DocumentStore::open(path, collection)?))
            }
        }
    }
}
