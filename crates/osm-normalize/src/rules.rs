//! Per-key normalization rules.
//!
//! Every tag key maps to exactly one [`Rule`] through [`RULE_TABLE`]; keys
//! that are not listed use [`Rule::Passthrough`]. All rules run after the
//! shared pre-step that turns underscores into spaces.

use osm_model::CleanValue;

use crate::error::Result;
use crate::phone::format_phone;
use crate::tables::{
    ACCESS_CORRECTIONS, BRAND_CORRECTIONS, NAME_CORRECTIONS, ONEWAY_CORRECTIONS,
    OPERATOR_CORRECTIONS, RAILWAY_CORRECTIONS, SPORT_CORRECTIONS, lookup, street_suffix,
};
use crate::text::{capitalize_words, replace_last_token};

/// Region the export covers; every `addr:state` value is forced to it.
pub const FIXED_STATE: &str = "Florida";

/// Separator for multi-valued keys.
pub const LIST_SEPARATOR: char = ';';

/// A value transformation selected by tag key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Lowercase the whole value.
    Lowercase,
    /// Split on `;` into a list.
    SplitList,
    /// Exact-match lookup in a correction table; other values pass through.
    Correct(&'static [(&'static str, &'static str)]),
    /// Case-insensitive lookup in a correction table keyed by lowercase value.
    CorrectIgnoreCase(&'static [(&'static str, &'static str)]),
    /// Capitalize every space-separated token.
    CapitalizeWords,
    /// Replace the value with [`FIXED_STATE`].
    FixedState,
    /// Expand an abbreviated street type at the end of the value.
    StreetSuffix,
    /// Strip `F`, `L` and spaces from both ends and drop a ZIP+4 suffix.
    Postcode,
    /// Reformat as `+1 DDD-DDD-DDDD`.
    Phone,
    /// Strip `f` and `t` from both ends (a trailing `ft` unit).
    Width,
    /// Keep the value as is.
    Passthrough,
}

/// Rule table, one entry per key.
pub const RULE_TABLE: &[(&str, Rule)] = &[
    ("cuisine", Rule::Lowercase),
    ("denomination", Rule::Lowercase),
    ("leisure", Rule::Lowercase),
    ("shop", Rule::Lowercase),
    ("routes", Rule::SplitList),
    ("sidewalk", Rule::SplitList),
    ("access", Rule::Correct(ACCESS_CORRECTIONS)),
    ("addr:city", Rule::CapitalizeWords),
    ("addr:state", Rule::FixedState),
    ("addr:street", Rule::StreetSuffix),
    ("addr:postcode", Rule::Postcode),
    ("brand", Rule::Correct(BRAND_CORRECTIONS)),
    ("name", Rule::CorrectIgnoreCase(NAME_CORRECTIONS)),
    ("oneway", Rule::Correct(ONEWAY_CORRECTIONS)),
    ("operator", Rule::CorrectIgnoreCase(OPERATOR_CORRECTIONS)),
    ("phone", Rule::Phone),
    ("railway", Rule::Correct(RAILWAY_CORRECTIONS)),
    ("sport", Rule::Correct(SPORT_CORRECTIONS)),
    ("width", Rule::Width),
];

/// Returns the rule for a tag key.
pub fn rule_for(key: &str) -> Rule {
    RULE_TABLE
        .iter()
        .find(|(rule_key, _)| *rule_key == key)
        .map_or(Rule::Passthrough, |(_, rule)| *rule)
}

impl Rule {
    /// Applies the rule to an underscore-cleaned value.
    pub fn apply(self, value: &str) -> Result<CleanValue> {
        let cleaned = match self {
            Self::Lowercase => value.to_lowercase(),
            Self::SplitList => {
                return Ok(CleanValue::List(
                    value.split(LIST_SEPARATOR).map(str::to_string).collect(),
                ));
            }
            Self::Correct(table) => lookup(table, value).unwrap_or(value).to_string(),
            Self::CorrectIgnoreCase(table) => lookup(table, &value.to_lowercase())
                .unwrap_or(value)
                .to_string(),
            Self::CapitalizeWords => capitalize_words(value),
            Self::FixedState => FIXED_STATE.to_string(),
            Self::StreetSuffix => replace_last_token(value, street_suffix),
            Self::Postcode => {
                let trimmed = value.trim_matches(|ch: char| matches!(ch, 'F' | 'L' | ' '));
                trimmed
                    .split_once('-')
                    .map_or(trimmed, |(head, _)| head)
                    .to_string()
            }
            Self::Phone => format_phone(value)?,
            Self::Width => value.trim_matches(|ch: char| matches!(ch, 'f' | 't')).to_string(),
            Self::Passthrough => value.to_string(),
        };
        Ok(CleanValue::Text(cleaned))
    }

    /// Short human-readable description, used by the CLI rule listing.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::SplitList => "split on ';' into a list",
            Self::Correct(_) => "exact-match correction table",
            Self::CorrectIgnoreCase(_) => "case-insensitive correction table",
            Self::CapitalizeWords => "capitalize each word",
            Self::FixedState => "force to 'Florida'",
            Self::StreetSuffix => "expand street-type abbreviation",
            Self::Postcode => "strip 'FL' prefix and ZIP+4 suffix",
            Self::Phone => "format as +1 DDD-DDD-DDDD",
            Self::Width => "strip 'ft' unit",
            Self::Passthrough => "unchanged",
        }
    }

    /// Correction table backing this rule, if any.
    pub fn corrections(self) -> Option<&'static [(&'static str, &'static str)]> {
        match self {
            Self::Correct(table) | Self::CorrectIgnoreCase(table) => Some(table),
            _ => None,
        }
    }
}

fn underscores_to_spaces(raw: &str) -> String {
    raw.replace('_', " ")
}

/// Cleans a raw tag value, surfacing rule failures.
pub fn try_clean(key: &str, raw: &str) -> Result<CleanValue> {
    rule_for(key).apply(&underscores_to_spaces(raw))
}

/// Cleans a raw tag value.
///
/// A value a rule cannot canonicalize (a malformed phone number) is kept in
/// its underscore-cleaned form.
pub fn clean(key: &str, raw: &str) -> CleanValue {
    let value = underscores_to_spaces(raw);
    rule_for(key)
        .apply(&value)
        .unwrap_or(CleanValue::Text(value))
}
