//! Static correction tables used by the normalization rules.
//!
//! Tables are `(from, to)` slices so they can be listed by the CLI and walked
//! by tests. Case-insensitive tables store their keys lowercased.

/// Street-type abbreviations replaced when they end an `addr:street` value.
pub const STREET_SUFFIXES: &[(&str, &str)] = &[
    ("St", "Street"),
    ("St.", "Street"),
    ("Ave", "Avenue"),
    ("Blvd", "Boulevard"),
    ("Cir", "Circle"),
    ("blvd.", "Boulevard"),
    ("Rd", "Road"),
    ("Dr", "Drive"),
];

/// Street-type words the street audit treats as already canonical.
pub const EXPECTED_STREET_TYPES: &[&str] = &[
    "Street",
    "Road",
    "Lane",
    "Drive",
    "Plaza",
    "Way",
    "Avenue",
    "Boulevard",
    "Trail",
    "Circle",
    "Court",
    "Parkway",
    "Place",
];

/// `name` corrections, keyed by lowercase value.
pub const NAME_CORRECTIONS: &[(&str, &str)] = &[
    ("chili's", "Chili's"),
    ("fairwinds credit union", "Fairwinds Credit Union"),
    ("gamestop", "GameStop"),
    ("freezone street", "FreeZone Street"),
    ("preston street", "Preston Street"),
    ("7-eleven", "7-Eleven"),
    ("atm", "Atm"),
    ("doubletree", "DoubleTree"),
    ("alta westgate drive", "Alta Westgate Drive"),
    ("bp", "BP"),
    ("aldi", "ALDI"),
    ("stoneybrook fitness center", "Stoneybrook Fitness Center"),
];

/// `operator` corrections, keyed by lowercase value.
pub const OPERATOR_CORRECTIONS: &[(&str, &str)] = &[
    ("chase bank na", "Chase"),
    ("city of orlando", "City of Orlando"),
    ("disney parks", "Disney Parks and Resorts"),
    ("disney parks and reosrt", "Disney Parks and Resorts"),
    ("fdot", "Florida Department of Transportation"),
    ("suncoast energys", "Suncoast Energys"),
    (
        "seaworld parks & entertainment",
        "SeaWorld Parks and Entertainment",
    ),
];

/// Exact-match `brand` corrections.
pub const BRAND_CORRECTIONS: &[(&str, &str)] = &[
    ("7-11", "7-Eleven"),
    ("Edwin Watts Golf Shops", "Edwin Watts"),
];

/// Exact-match `oneway` corrections.
pub const ONEWAY_CORRECTIONS: &[(&str, &str)] = &[("1", "yes"), ("-1", "no")];

/// Exact-match `railway` typo fixes.
pub const RAILWAY_CORRECTIONS: &[(&str, &str)] = &[
    ("emergancy platform", "emergency platform"),
    ("monorial", "monorail"),
];

/// Exact-match `sport` corrections.
pub const SPORT_CORRECTIONS: &[(&str, &str)] = &[
    ("beachvolleyball", "beach volleyball"),
    ("minigolf", "miniature golf"),
];

/// Exact-match `access` corrections.
pub const ACCESS_CORRECTIONS: &[(&str, &str)] = &[("pri", "private")];

/// Looks up an exact key in a correction table.
pub fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

/// Returns the full street type for an abbreviation.
pub fn street_suffix(token: &str) -> Option<&'static str> {
    lookup(STREET_SUFFIXES, token)
}

/// Returns true if a street ends in a word the street audit accepts.
pub fn is_expected_street_type(token: &str) -> bool {
    EXPECTED_STREET_TYPES.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_tables_use_lowercase_keys() {
        for (from, _) in NAME_CORRECTIONS.iter().chain(OPERATOR_CORRECTIONS) {
            assert_eq!(*from, from.to_lowercase(), "key '{from}' is not lowercase");
        }
    }

    #[test]
    fn every_suffix_expands_to_an_expected_type() {
        for (abbreviation, full) in STREET_SUFFIXES {
            assert!(
                is_expected_street_type(full),
                "{abbreviation} expands to unexpected '{full}'"
            );
        }
    }

    #[test]
    fn street_suffix_is_case_sensitive() {
        assert_eq!(street_suffix("St"), Some("Street"));
        assert_eq!(street_suffix("blvd."), Some("Boulevard"));
        assert_eq!(street_suffix("st"), None);
        assert_eq!(street_suffix("Street"), None);
    }
}
