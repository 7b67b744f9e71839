//! Key-frequency audits.

use std::collections::{BTreeMap, BTreeSet};

use osm_model::RawTag;
use osm_normalize::{is_namespaced_key_default, is_plain_key};

use crate::report::AuditReport;
use crate::runner::AuditVariant;

const ADDRESS_PREFIX: &str = "addr:";

fn tally(counts: &mut BTreeMap<String, usize>, key: &str) {
    *counts.entry(key.to_string()).or_default() += 1;
}

fn count_report(
    title: &'static str,
    header: &'static str,
    counts: &BTreeMap<String, usize>,
) -> AuditReport {
    counts
        .iter()
        .fold(AuditReport::new(title, [header, "Count"]), |report, (key, count)| {
            report.with_row(key.as_str(), count.to_string())
        })
}

/// Frequency of every plain or namespaced key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyAudit {
    counts: BTreeMap<String, usize>,
    ignored: usize,
}

impl KeyAudit {
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Tags whose key would be dropped by the record builder.
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

impl AuditVariant for KeyAudit {
    fn observe(&mut self, tag: &RawTag) {
        if is_plain_key(&tag.key) || is_namespaced_key_default(&tag.key) {
            tally(&mut self.counts, &tag.key);
        } else {
            self.ignored += 1;
        }
    }

    fn report(&self) -> AuditReport {
        count_report("Tag keys", "Key", &self.counts)
    }
}

/// Frequency of every `addr:*` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressKeyAudit {
    counts: BTreeMap<String, usize>,
}

impl AddressKeyAudit {
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }
}

impl AuditVariant for AddressKeyAudit {
    fn observe(&mut self, tag: &RawTag) {
        if tag.key.starts_with(ADDRESS_PREFIX) {
            tally(&mut self.counts, &tag.key);
        }
    }

    fn report(&self) -> AuditReport {
        count_report("Address keys", "Key", &self.counts)
    }
}

/// Keys whose lowercased raw value equals a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysWithValueAudit {
    literal: String,
    keys: BTreeSet<String>,
}

impl KeysWithValueAudit {
    /// The literal is matched case-insensitively.
    pub fn new(literal: &str) -> Self {
        Self {
            literal: literal.to_lowercase(),
            keys: BTreeSet::new(),
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }
}

impl AuditVariant for KeysWithValueAudit {
    fn observe(&mut self, tag: &RawTag) {
        if tag.value.to_lowercase() == self.literal {
            self.keys.insert(tag.key.clone());
        }
    }

    fn report(&self) -> AuditReport {
        self.keys.iter().fold(
            AuditReport::new("Keys with value", ["Key", "Value"]),
            |report, key| report.with_row(key.as_str(), self.literal.as_str()),
        )
    }
}
