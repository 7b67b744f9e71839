//! Cleaned tag values and record field shapes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Output of the normalizer for a single tag value.
///
/// Most keys clean to a single string; multi-valued keys (`routes`,
/// `sidewalk`) clean to a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CleanValue {
    Text(String),
    List(Vec<String>),
}

impl CleanValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

/// Lists render joined with `;`, the separator they were split on.
impl fmt::Display for CleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::List(items) => f.write_str(&items.join(";")),
        }
    }
}

impl From<&str> for CleanValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CleanValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for CleanValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// A top-level record field.
///
/// Plain tag keys produce a `Value`; namespaced keys (`addr:city`) produce a
/// `Document` keyed by sub-key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Value(CleanValue),
    Document(BTreeMap<String, CleanValue>),
}

impl Field {
    pub fn as_value(&self) -> Option<&CleanValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::Document(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        self.as_value().and_then(CleanValue::as_text)
    }

    pub fn as_document(&self) -> Option<&BTreeMap<String, CleanValue>> {
        match self {
            Self::Value(_) => None,
            Self::Document(document) => Some(document),
        }
    }

    pub fn as_document_mut(&mut self) -> Option<&mut BTreeMap<String, CleanValue>> {
        match self {
            Self::Value(_) => None,
            Self::Document(document) => Some(document),
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, Self::Document(_))
    }
}

impl From<CleanValue> for Field {
    fn from(value: CleanValue) -> Self {
        Self::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_display_joins_with_semicolon() {
        let value = CleanValue::List(vec!["1".into(), "2".into()]);
        assert_eq!(value.to_string(), "1;2");
        assert_eq!(CleanValue::from("yes").to_string(), "yes");
    }

    #[test]
    fn field_accessors_match_shape() {
        let value = Field::from(CleanValue::from("x"));
        assert_eq!(value.as_text(), Some("x"));
        assert!(value.as_document().is_none());

        let document = Field::Document(BTreeMap::from([(
            "city".to_string(),
            CleanValue::from("Orlando"),
        )]));
        assert!(document.is_document());
        assert!(document.as_text().is_none());
    }
}
