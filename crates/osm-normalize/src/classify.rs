//! Tag key classification.
//!
//! A key is either *plain* (`name`, `amenity`), *namespaced* with a single
//! separator (`addr:city`), or ignored. Ignored keys never reach a record.

/// Separator between namespace and sub-key.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Characters that disqualify a namespaced key.
const FORBIDDEN_CHARS: &[char] = &[
    '=', '+', '/', '&', '<', '>', ';', '\'', '"', '?', '%', '#', '$', '@', ',', '.', ' ', '\t',
    '\r', '\n',
];

/// Namespaces renamed when a key is split into a record field.
const NAMESPACE_RENAMES: &[(&str, &str)] = &[("addr", "address")];

/// Shape of a tag key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass<'a> {
    Plain(&'a str),
    Namespaced { namespace: &'a str, subkey: &'a str },
    Ignored,
}

/// True when the value has at least one cased character and no uppercase one.
fn is_lowercase_text(value: &str) -> bool {
    let mut cased = false;
    for ch in value.chars() {
        if ch.is_uppercase() {
            return false;
        }
        if ch.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// Returns true if the key is entirely lowercase alphabetic.
pub fn is_plain_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(char::is_alphabetic) && is_lowercase_text(key)
}

/// Returns true if the key is lowercase, has exactly `required_separators`
/// separators, and contains no forbidden characters.
pub fn is_namespaced_key(key: &str, required_separators: usize) -> bool {
    is_lowercase_text(key)
        && key.matches(NAMESPACE_SEPARATOR).count() == required_separators
        && !key.contains(FORBIDDEN_CHARS)
}

/// [`is_namespaced_key`] with a single separator.
pub fn is_namespaced_key_default(key: &str) -> bool {
    is_namespaced_key(key, 1)
}

fn rename_namespace(namespace: &str) -> &str {
    NAMESPACE_RENAMES
        .iter()
        .find(|(from, _)| *from == namespace)
        .map_or(namespace, |(_, to)| to)
}

/// Splits a single-separator key into `(namespace, subkey)`, applying the
/// namespace rename table.
pub fn split_namespaced_key(key: &str) -> Option<(&str, &str)> {
    let (namespace, subkey) = key.split_once(NAMESPACE_SEPARATOR)?;
    Some((rename_namespace(namespace), subkey))
}

/// Classifies a key for record building.
pub fn classify_key(key: &str) -> KeyClass<'_> {
    if is_plain_key(key) {
        return KeyClass::Plain(key);
    }
    if is_namespaced_key_default(key)
        && let Some((namespace, subkey)) = split_namespaced_key(key)
    {
        return KeyClass::Namespaced { namespace, subkey };
    }
    KeyClass::Ignored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys() {
        assert!(is_plain_key("name"));
        assert!(is_plain_key("amenity"));
        assert!(!is_plain_key("Name"));
        assert!(!is_plain_key("addr:city"));
        assert!(!is_plain_key("name1"));
        assert!(!is_plain_key(""));
    }

    #[test]
    fn namespaced_keys() {
        assert!(is_namespaced_key_default("addr:city"));
        assert!(is_namespaced_key_default("tiger:name_base"));
        assert!(!is_namespaced_key("a:b:c", 1));
        assert!(is_namespaced_key("a:b:c", 2));
        assert!(!is_namespaced_key_default("Addr:city"));
        assert!(!is_namespaced_key_default("addr:city.name"));
        assert!(!is_namespaced_key_default("addr: city"));
        assert!(!is_namespaced_key_default("name"));
    }

    #[test]
    fn numeric_only_key_is_not_lowercase() {
        assert!(!is_namespaced_key_default("1:2"));
    }

    #[test]
    fn splits_and_renames_address_namespace() {
        assert_eq!(split_namespaced_key("addr:city"), Some(("address", "city")));
        assert_eq!(split_namespaced_key("gnis:id"), Some(("gnis", "id")));
        assert_eq!(split_namespaced_key("name"), None);
    }

    #[test]
    fn classify_examples() {
        assert_eq!(classify_key("shop"), KeyClass::Plain("shop"));
        assert_eq!(
            classify_key("addr:street"),
            KeyClass::Namespaced {
                namespace: "address",
                subkey: "street"
            }
        );
        assert_eq!(classify_key("FIXME"), KeyClass::Ignored);
        assert_eq!(classify_key("name:en:us"), KeyClass::Ignored);
    }
}
