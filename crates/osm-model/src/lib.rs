//! Data model for the OSM tag cleaning pipeline.
//!
//! - **element**: source elements as produced by the XML reader
//! - **value**: cleaned tag values and record fields
//! - **record**: the nested output record handed to a sink

pub mod element;
pub mod record;
pub mod value;

pub use element::{ElementKind, RawTag, SourceElement};
pub use record::{CREATED_FIELD, POSITION_FIELD, RESERVED_FIELDS, Record};
pub use value::{CleanValue, Field};
