//! Error types for OSM ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading an OSM export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("OSM file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === XML Errors ===
    /// The XML stream is malformed.
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// A `<tag>` child is missing its `k` or `v` attribute.
    #[error("<tag> element at byte {position} has no '{attribute}' attribute")]
    MissingTagAttribute {
        attribute: &'static str,
        position: u64,
    },

    /// The stream ended while an element was still open.
    #[error("unexpected end of input inside <{element}> element")]
    UnexpectedEof { element: String },

    /// The stream ended without any root element.
    #[error("input contains no root element")]
    NoRootElement,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/map.osm"),
        };
        assert_eq!(err.to_string(), "OSM file not found: /path/to/map.osm");

        let err = IngestError::MissingTagAttribute {
            attribute: "k",
            position: 42,
        };
        assert_eq!(
            err.to_string(),
            "<tag> element at byte 42 has no 'k' attribute"
        );

        let err = IngestError::UnexpectedEof {
            element: "osm".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected end of input inside <osm> element");
    }
}
