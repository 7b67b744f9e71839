//! OpenStreetMap XML ingestion.
//!
//! This crate streams `node` and `way` elements, with their attributes and
//! child `<tag>` entries, out of an OSM XML export. Every other element kind
//! is skipped together with its children.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use osm_ingest::OsmReader;
//!
//! let mut reader = OsmReader::from_path(Path::new("orlando.osm"))?;
//! for element in &mut reader {
//!     let element = element?;
//!     println!("{} with {} tags", element.kind, element.tags.len());
//! }
//! println!("skipped {}", reader.stats().skipped);
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use reader::{OsmReader, ReadStats};
