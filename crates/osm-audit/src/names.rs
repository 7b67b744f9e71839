use std::collections::{BTreeMap, BTreeSet};

use osm_model::RawTag;

use crate::report::AuditReport;
use crate::runner::AuditVariant;

const NAME_KEY: &str = "name";

/// Distinct raw `name` values grouped by their lowercase form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameAudit {
    variants: BTreeMap<String, BTreeSet<String>>,
    show_all: bool,
}

impl NameAudit {
    /// Reports every group, not only conflicting ones.
    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    pub fn variants(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.variants
    }

    /// Groups with more than one capitalization.
    pub fn conflicting(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.variants
            .iter()
            .filter(|(_, spellings)| spellings.len() > 1)
            .map(|(folded, spellings)| (folded.as_str(), spellings))
    }
}

impl AuditVariant for NameAudit {
    fn observe(&mut self, tag: &RawTag) {
        if tag.key == NAME_KEY {
            self.variants
                .entry(tag.value.to_lowercase())
                .or_default()
                .insert(tag.value.clone());
        }
    }

    fn report(&self) -> AuditReport {
        let title = if self.show_all {
            "Name capitalizations"
        } else {
            "Conflicting name capitalizations"
        };
        let mut report = AuditReport::new(title, ["Name", "Variants"]);
        for (folded, spellings) in &self.variants {
            if !self.show_all && spellings.len() < 2 {
                continue;
            }
            let joined = spellings.iter().map(String::as_str).collect::<Vec<_>>().join(" | ");
            report = report.with_row(folded.as_str(), joined);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_groups_need_two_spellings() {
        let mut audit = NameAudit::default();
        for value in ["GameStop", "Gamestop", "GameStop", "Publix"] {
            audit.observe(&RawTag::new(NAME_KEY, value));
        }
        let conflicting: Vec<_> = audit.conflicting().collect();
        assert_eq!(conflicting.len(), 1);
        assert_eq!(conflicting[0].0, "gamestop");
        assert_eq!(conflicting[0].1.len(), 2);

        assert_eq!(audit.report().rows.len(), 1);
        assert_eq!(audit.show_all(true).report().rows.len(), 2);
    }
}
