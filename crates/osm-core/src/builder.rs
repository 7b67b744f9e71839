//! Builds a [`Record`] from one source element.
//!
//! Attributes are split into the record id, the position and the `created`
//! block. Each tag key is classified; plain keys become top-level fields and
//! namespaced keys become entries of a per-namespace sub-document. Tags in
//! the `pos` and `created` namespaces merge into those attribute blocks.

use std::collections::BTreeMap;

use osm_model::{
    CREATED_FIELD, CleanValue, Field, POSITION_FIELD, RESERVED_FIELDS, RawTag, Record,
    SourceElement,
};
use osm_normalize::{KeyClass, classify_key, clean, try_clean};
use tracing::{debug, warn};

use crate::postprocess::{AddressDefaults, finalize};

const ID_ATTRIBUTE: &str = "id";
const POSITION_ATTRIBUTES: &[&str] = &["lat", "lon"];

/// Counters collected while building records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Records built.
    pub records: usize,
    /// Tag values written into records.
    pub fields: usize,
    /// Tags whose key is neither plain nor single-namespaced.
    pub dropped_keys: usize,
    /// Tags dropped because their field name is a reserved record field.
    pub reserved_keys: usize,
    /// Namespaced writes that turned a scalar or list field into a document.
    pub collisions: usize,
    /// Writes that replaced an existing field or attribute entry.
    pub overwrites: usize,
    /// Values kept uncleaned because their rule rejected them.
    pub malformed_values: usize,
}

/// Builds a record without post-processing.
pub fn build_record(element: &SourceElement, stats: &mut BuildStats) -> Record {
    let mut record = Record::new(element.kind);

    for (name, value) in &element.attributes {
        if name == ID_ATTRIBUTE {
            record.id = Some(value.clone());
        } else if POSITION_ATTRIBUTES.contains(&name.as_str()) {
            record.insert_position(name.as_str(), value.as_str());
        } else {
            record.insert_created(name.as_str(), value.as_str());
        }
    }

    for tag in &element.tags {
        apply_tag(&mut record, tag, stats);
    }

    stats.records += 1;
    record
}

fn apply_tag(record: &mut Record, tag: &RawTag, stats: &mut BuildStats) {
    let (field, subkey) = match classify_key(&tag.key) {
        KeyClass::Plain(key) => (key, None),
        KeyClass::Namespaced { namespace, subkey } => (namespace, Some(subkey)),
        KeyClass::Ignored => {
            stats.dropped_keys += 1;
            debug!(key = %tag.key, "dropping unrecognized key");
            return;
        }
    };

    let attribute_block = subkey.is_some() && (field == POSITION_FIELD || field == CREATED_FIELD);
    if RESERVED_FIELDS.contains(&field) && !attribute_block {
        stats.reserved_keys += 1;
        debug!(key = %tag.key, field, "dropping key that maps to a reserved field");
        return;
    }

    let value = clean_tag_value(tag, stats);
    let replaced = match subkey {
        None => record
            .fields
            .insert(field.to_string(), Field::Value(value))
            .is_some(),
        Some(subkey) if field == POSITION_FIELD => record
            .insert_position(subkey, value.to_string())
            .is_some(),
        Some(subkey) if field == CREATED_FIELD => record
            .insert_created(subkey, value.to_string())
            .is_some(),
        Some(subkey) => {
            insert_namespaced(record, field, subkey, value, stats);
            false
        }
    };
    if replaced {
        stats.overwrites += 1;
    }
    stats.fields += 1;
}

fn clean_tag_value(tag: &RawTag, stats: &mut BuildStats) -> CleanValue {
    match try_clean(&tag.key, &tag.value) {
        Ok(value) => value,
        Err(err) => {
            stats.malformed_values += 1;
            warn!(key = %tag.key, error = %err, "keeping uncleaned value");
            clean(&tag.key, &tag.value)
        }
    }
}

/// Writes `field.subkey`. A scalar or list already stored under `field` is
/// moved into the new document under the field's own name.
fn insert_namespaced(
    record: &mut Record,
    field: &str,
    subkey: &str,
    value: CleanValue,
    stats: &mut BuildStats,
) {
    let mut document = match record.fields.remove(field) {
        Some(Field::Document(document)) => document,
        Some(Field::Value(previous)) => {
            stats.collisions += 1;
            warn!(
                field,
                subkey,
                id = record.id.as_deref().unwrap_or("-"),
                "namespaced key collides with an existing value; nesting it"
            );
            BTreeMap::from([(field.to_string(), previous)])
        }
        None => BTreeMap::new(),
    };
    document.insert(subkey.to_string(), value);
    record
        .fields
        .insert(field.to_string(), Field::Document(document));
}

/// Builds and post-processes records, accumulating [`BuildStats`].
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    defaults: AddressDefaults,
    stats: BuildStats,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(mut self, defaults: AddressDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Builds one record and fills its address defaults.
    pub fn build(&mut self, element: &SourceElement) -> Record {
        let mut record = build_record(element, &mut self.stats);
        finalize(&mut record, &self.defaults);
        record
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    pub fn into_stats(self) -> BuildStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use osm_model::ElementKind;

    use super::*;

    fn node(tags: &[(&str, &str)]) -> SourceElement {
        tags.iter().fold(SourceElement::new(ElementKind::Node), |element, (k, v)| {
            element.with_tag(*k, *v)
        })
    }

    #[test]
    fn attributes_are_split() {
        let element = SourceElement::new(ElementKind::Node)
            .with_attribute("id", "42")
            .with_attribute("lat", "28.5")
            .with_attribute("lon", "-81.3")
            .with_attribute("user", "mapper")
            .with_attribute("version", "3");
        let mut stats = BuildStats::default();
        let record = build_record(&element, &mut stats);

        assert_eq!(record.id.as_deref(), Some("42"));
        assert_eq!(record.pos.as_ref().map(BTreeMap::len), Some(2));
        let created = record.created.as_ref().unwrap();
        assert_eq!(created["user"], "mapper");
        assert_eq!(created["version"], "3");
        assert_eq!(stats.records, 1);
    }

    #[test]
    fn ignored_and_reserved_keys_are_counted() {
        let mut stats = BuildStats::default();
        let record = build_record(
            &node(&[("FIXME", "x"), ("name:en:us", "y"), ("type", "multipolygon")]),
            &mut stats,
        );
        assert!(record.fields.is_empty());
        assert_eq!(stats.dropped_keys, 2);
        assert_eq!(stats.reserved_keys, 1);
        assert_eq!(stats.fields, 0);
    }

    #[test]
    fn attribute_namespaces_merge_into_their_blocks() {
        let element = node(&[("created:by", "JOSM"), ("pos:source", "survey")])
            .with_attribute("lat", "28.5")
            .with_attribute("user", "mapper");
        let mut stats = BuildStats::default();
        let record = build_record(&element, &mut stats);

        let created = record.created.as_ref().unwrap();
        assert_eq!(created["by"], "JOSM");
        assert_eq!(created["user"], "mapper");
        let pos = record.pos.as_ref().unwrap();
        assert_eq!(pos["source"], "survey");
        assert_eq!(pos["lat"], "28.5");
        assert!(record.fields.is_empty());
        assert_eq!(stats.fields, 2);
        assert_eq!(stats.reserved_keys, 0);
    }

    #[test]
    fn attribute_namespace_tag_replaces_attribute() {
        let element = node(&[("created:user", "other")]).with_attribute("user", "mapper");
        let mut stats = BuildStats::default();
        let record = build_record(&element, &mut stats);
        assert_eq!(record.created.as_ref().unwrap()["user"], "other");
        assert_eq!(stats.overwrites, 1);
    }

    #[test]
    fn plain_attribute_block_names_are_reserved() {
        let mut stats = BuildStats::default();
        let record = build_record(
            &node(&[("pos", "x"), ("created", "y"), ("type:note", "z"), ("_id:x", "w")]),
            &mut stats,
        );
        assert!(record.fields.is_empty());
        assert!(record.pos.is_none());
        assert!(record.created.is_none());
        assert_eq!(stats.reserved_keys, 4);
    }

    #[test]
    fn plain_write_replaces_document() {
        let mut stats = BuildStats::default();
        let record = build_record(&node(&[("gnis:id", "1"), ("gnis", "x")]), &mut stats);
        assert_eq!(record.field("gnis"), Some(&Field::Value(CleanValue::from("x"))));
        assert_eq!(stats.overwrites, 1);
        assert_eq!(stats.collisions, 0);
    }

    #[test]
    fn malformed_phone_is_kept_and_counted() {
        let mut stats = BuildStats::default();
        let record = build_record(&node(&[("phone", "call_me")]), &mut stats);
        assert_eq!(record.field("phone").and_then(Field::as_text), Some("call me"));
        assert_eq!(stats.malformed_values, 1);
    }
}
