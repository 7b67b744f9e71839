use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;
use crate::value::{CleanValue, Field};

/// Record keys that tag fields may not occupy.
///
/// These names hold the structured parts of a record in its serialized form,
/// so a tag field with the same name would produce a duplicate JSON key.
pub const RESERVED_FIELDS: &[&str] = &["_id", "type", POSITION_FIELD, CREATED_FIELD];

/// Record key holding the `lat`/`lon` attributes.
pub const POSITION_FIELD: &str = "pos";

/// Record key holding the remaining element attributes.
pub const CREATED_FIELD: &str = "created";

/// The cleaned, nested document built from one source element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Source element identifier, copied verbatim.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// `lat`/`lon` attributes, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<BTreeMap<String, String>>,
    /// Every other element attribute (version, timestamp, user, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<BTreeMap<String, String>>,
    /// Tag-derived fields, flattened into the record object.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Field>,
}

impl Record {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: None,
            kind,
            pos: None,
            created: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Returns the sub-document stored under `name`, if that field is one.
    pub fn document(&self, name: &str) -> Option<&BTreeMap<String, CleanValue>> {
        self.fields.get(name).and_then(Field::as_document)
    }

    pub fn document_mut(&mut self, name: &str) -> Option<&mut BTreeMap<String, CleanValue>> {
        self.fields.get_mut(name).and_then(Field::as_document_mut)
    }

    /// Sets a `pos` entry, returning the value it replaced.
    pub fn insert_position(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.pos
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into())
    }

    /// Sets a `created` entry, returning the value it replaced.
    pub fn insert_created(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.created
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into())
    }
}
