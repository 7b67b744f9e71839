//! String helpers shared by the normalization rules.

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalizes every space-separated token, keeping the spacing intact.
pub fn capitalize_words(value: &str) -> String {
    value
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replaces the last space-separated token through `replace`, if it matches.
pub fn replace_last_token(value: &str, replace: impl Fn(&str) -> Option<&'static str>) -> String {
    let mut tokens: Vec<&str> = value.split(' ').collect();
    if let Some(last) = tokens.last_mut()
        && let Some(replacement) = replace(*last)
    {
        *last = replacement;
    }
    tokens.join(" ")
}

/// Returns the last space-separated token.
pub fn last_token(value: &str) -> &str {
    value.rsplit(' ').next().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("oRLANDO"), "Orlando");
        assert_eq!(capitalize("fl"), "Fl");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("3rd"), "3rd");
    }

    #[test]
    fn capitalize_words_keeps_double_spaces() {
        assert_eq!(capitalize_words("winter  park"), "Winter  Park");
    }

    #[test]
    fn last_token_of_single_word() {
        assert_eq!(last_token("Main"), "Main");
        assert_eq!(last_token("Main St"), "St");
        assert_eq!(last_token("Main "), "");
    }
}
