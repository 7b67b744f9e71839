use std::collections::{BTreeMap, BTreeSet};

use osm_model::RawTag;
use osm_normalize::tables::{is_expected_street_type, street_suffix};
use osm_normalize::text::last_token;

use crate::report::AuditReport;
use crate::runner::AuditVariant;

const STREET_KEY: &str = "addr:street";

/// Raw `addr:street` values grouped by an unexpected final token.
///
/// The token is taken after abbreviation expansion, so `Main St` is accepted
/// as `Street` while `Main Hwy` is reported under `Hwy`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetTypeAudit {
    unexpected: BTreeMap<String, BTreeSet<String>>,
}

impl StreetTypeAudit {
    pub fn unexpected(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.unexpected
    }
}

impl AuditVariant for StreetTypeAudit {
    fn observe(&mut self, tag: &RawTag) {
        if tag.key != STREET_KEY {
            return;
        }
        let token = last_token(&tag.value);
        let token = street_suffix(token).unwrap_or(token);
        if !is_expected_street_type(token) {
            self.unexpected
                .entry(token.to_string())
                .or_default()
                .insert(tag.value.clone());
        }
    }

    fn report(&self) -> AuditReport {
        let mut report = AuditReport::new("Unexpected street types", ["Type", "Streets"]);
        for (token, streets) in &self.unexpected {
            let joined = streets.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
            report = report.with_row(token.as_str(), joined);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audit(values: &[&str]) -> StreetTypeAudit {
        let mut audit = StreetTypeAudit::default();
        for value in values {
            audit.observe(&RawTag::new(STREET_KEY, *value));
        }
        audit
    }

    #[test]
    fn abbreviations_count_as_expected() {
        assert!(audit(&["Main St", "Colonial Dr", "Park Avenue"]).unexpected().is_empty());
    }

    #[test]
    fn unexpected_tokens_group_raw_values() {
        let audit = audit(&["US 441 Hwy", "Orange Blossom Trl", "SR 50 Hwy", "US 441 Hwy"]);
        let hwy = &audit.unexpected()["Hwy"];
        assert_eq!(hwy.len(), 2);
        assert!(hwy.contains("SR 50 Hwy"));
        assert!(audit.unexpected().contains_key("Trl"));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut audit = StreetTypeAudit::default();
        audit.observe(&RawTag::new("name", "Foo Hwy"));
        assert!(audit.unexpected().is_empty());
    }
}
