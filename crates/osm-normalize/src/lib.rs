//! Value normalization for OSM tags.
//!
//! - **classify**: decides whether a tag key is plain, namespaced, or ignored
//! - **rules**: the per-key rule table behind [`clean`]
//! - **tables**: static correction tables (street suffixes, names, operators)
//! - **phone**: North American phone number formatting
//! - **text**: small string helpers shared by the rules

pub mod classify;
mod error;
pub mod phone;
pub mod rules;
pub mod tables;
pub mod text;

pub use classify::{
    KeyClass, NAMESPACE_SEPARATOR, classify_key, is_namespaced_key, is_namespaced_key_default,
    is_plain_key, split_namespaced_key,
};
pub use error::{NormalizeError, Result};
pub use phone::format_phone;
pub use rules::{RULE_TABLE, Rule, clean, rule_for, try_clean};
