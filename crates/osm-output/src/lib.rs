//! Sinks for cleaned OSM records.
//!
//! Two destinations are supported:
//!
//! - **JSON file**: records are buffered and written once, as a single JSON
//!   array, when the sink is finished (temp file + rename)
//! - **Document store**: every record is inserted immediately as one JSON
//!   document in a named collection of a SQLite database
//!
//! # Example
//!
//! ```ignore
//! use osm_output::{RecordSink, SinkConfig};
//!
//! let mut sink = SinkConfig::JsonFile { path: "orlando.json".into() }.open()?;
//! sink.insert(record)?;
//! let report = sink.finish()?;
//! ```

mod error;
mod json;
mod sink;
mod store;

pub use error::{OutputError, Result};
pub use json::{JsonArrayWriter, write_json_array};
pub use sink::{RecordSink, SinkConfig, SinkReport};
pub use store::{DEFAULT_COLLECTION, DocumentStore};
