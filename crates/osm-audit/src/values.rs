//! Value audits for a single target key, and suspicious-literal tallies.

use std::collections::{BTreeMap, BTreeSet};

use osm_model::{CleanValue, RawTag};
use osm_normalize::clean;

use crate::report::AuditReport;
use crate::runner::AuditVariant;

/// Literals that usually mean a mapper typed a placeholder.
pub const DEFAULT_SUSPICIOUS_LITERALS: &[&str] = &["null", "none", "true", "false"];

/// Distinct cleaned values of one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSetAudit {
    target: String,
    values: BTreeSet<CleanValue>,
}

impl ValueSetAudit {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            values: BTreeSet::new(),
        }
    }

    pub fn values(&self) -> &BTreeSet<CleanValue> {
        &self.values
    }
}

impl AuditVariant for ValueSetAudit {
    fn observe(&mut self, tag: &RawTag) {
        if tag.key == self.target {
            self.values.insert(clean(&tag.key, &tag.value));
        }
    }

    fn report(&self) -> AuditReport {
        self.values.iter().fold(
            AuditReport::new("Distinct cleaned values", ["Key", "Value"]),
            |report, value| report.with_row(self.target.as_str(), value.to_string()),
        )
    }
}

/// Frequency of cleaned values of one key. Lists are tallied joined by `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTallyAudit {
    target: String,
    counts: BTreeMap<String, usize>,
}

impl ValueTallyAudit {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            counts: BTreeMap::new(),
        }
    }

    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }
}

impl AuditVariant for ValueTallyAudit {
    fn observe(&mut self, tag: &RawTag) {
        if tag.key == self.target {
            let value = clean(&tag.key, &tag.value).to_string();
            *self.counts.entry(value).or_default() += 1;
        }
    }

    fn report(&self) -> AuditReport {
        self.counts.iter().fold(
            AuditReport::new("Cleaned value frequency", ["Value", "Count"]),
            |report, (value, count)| report.with_row(value.as_str(), count.to_string()),
        )
    }
}

/// Frequency of lowercased raw values found in a literal set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspiciousValueAudit {
    literals: BTreeSet<String>,
    counts: BTreeMap<String, usize>,
}

impl SuspiciousValueAudit {
    pub fn new<I, S>(literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            literals: literals
                .into_iter()
                .map(|literal| literal.as_ref().to_lowercase())
                .collect(),
            counts: BTreeMap::new(),
        }
    }

    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }
}

impl Default for SuspiciousValueAudit {
    fn default() -> Self {
        Self::new(DEFAULT_SUSPICIOUS_LITERALS)
    }
}

impl AuditVariant for SuspiciousValueAudit {
    fn observe(&mut self, tag: &RawTag) {
        let value = tag.value.to_lowercase();
        if self.literals.contains(&value) {
            *self.counts.entry(value).or_default() += 1;
        }
    }

    fn report(&self) -> AuditReport {
        self.counts.iter().fold(
            AuditReport::new("Suspicious values", ["Value", "Count"]),
            |report, (value, count)| report.with_row(value.as_str(), count.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_set_uses_cleaned_values() {
        let mut audit = ValueSetAudit::new("addr:state");
        for value in ["FL", "Fla", "Florida"] {
            audit.observe(&RawTag::new("addr:state", value));
        }
        audit.observe(&RawTag::new("addr:city", "orlando"));
        assert_eq!(
            audit.values().iter().collect::<Vec<_>>(),
            [&CleanValue::from("Florida")]
        );
    }

    #[test]
    fn value_tally_joins_lists() {
        let mut audit = ValueTallyAudit::new("sidewalk");
        audit.observe(&RawTag::new("sidewalk", "left;right"));
        audit.observe(&RawTag::new("sidewalk", "left;right"));
        audit.observe(&RawTag::new("sidewalk", "both"));
        assert_eq!(audit.counts().get("left;right"), Some(&2));
        assert_eq!(audit.counts().get("both"), Some(&1));
    }

    #[test]
    fn suspicious_values_are_lowercased() {
        let mut audit = SuspiciousValueAudit::default();
        for value in ["NULL", "null", "None", "yes", "False"] {
            audit.observe(&RawTag::new("fee", value));
        }
        assert_eq!(audit.counts().get("null"), Some(&2));
        assert_eq!(audit.counts().get("none"), Some(&1));
        assert_eq!(audit.counts().get("false"), Some(&1));
        assert!(!audit.counts().contains_key("yes"));
    }
}
