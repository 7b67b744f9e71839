//! Record post-processing applied after all tags are written.

use osm_model::{CleanValue, Record};
use osm_normalize::rules::FIXED_STATE;

/// Field holding the `addr:*` sub-document.
pub const ADDRESS_FIELD: &str = "address";

/// Values filled into an address document when missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressDefaults {
    pub county: String,
    pub state: String,
    pub country: String,
}

impl Default for AddressDefaults {
    fn default() -> Self {
        Self {
            county: "Orange".to_string(),
            state: FIXED_STATE.to_string(),
            country: "US".to_string(),
        }
    }
}

impl AddressDefaults {
    fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("county", self.county.as_str()),
            ("state", self.state.as_str()),
            ("country", self.country.as_str()),
        ]
    }
}

/// Fills missing address defaults. Existing sub-keys are never overwritten,
/// and a record whose `address` field is not a document is left untouched.
pub fn finalize(record: &mut Record, defaults: &AddressDefaults) {
    let Some(address) = record.document_mut(ADDRESS_FIELD) else {
        return;
    };
    for (key, value) in defaults.entries() {
        address
            .entry(key.to_string())
            .or_insert_with(|| CleanValue::from(value));
    }
}
