//! Phone number formatting.
//!
//! Values are reduced to bare digits and rendered as `+1 DDD-DDD-DDDD`.
//! Toll-free numbers that kept their trunk prefix (`18..`) render as
//! `+1 1-DDD-DDD-DDDD`.

use crate::error::{NormalizeError, Result};

/// Sequences removed, in order, before the digits are sliced.
const STRIPPED_SEQUENCES: &[&str] = &["+1", " ", "-", ".", "(", ")", "+"];

const LOCAL_DIGITS: usize = 10;
const TRUNK_DIGITS: usize = 11;

fn strip_to_digits(raw: &str) -> String {
    let mut digits = raw.strip_prefix("1-").unwrap_or(raw).to_string();
    for sequence in STRIPPED_SEQUENCES {
        digits = digits.replace(sequence, "");
    }
    digits
}

/// Formats a phone value, rejecting anything that is not exactly a 10-digit
/// number (or an 11-digit number starting with `18`) once punctuation is gone.
pub fn format_phone(raw: &str) -> Result<String> {
    let digits = strip_to_digits(raw);
    let malformed = || NormalizeError::MalformedPhone {
        raw: raw.to_string(),
        digits: digits.clone(),
    };
    if !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(malformed());
    }
    if digits.starts_with("18") {
        if digits.len() != TRUNK_DIGITS {
            return Err(malformed());
        }
        return Ok(format!(
            "+1 1-{}-{}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        ));
    }
    if digits.len() != LOCAL_DIGITS {
        return Err(malformed());
    }
    Ok(format!(
        "+1 {}-{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_common_layouts() {
        for raw in [
            "1-407-555-0100",
            "+1 407 555 0100",
            "+1-407-555-0100",
            "(407) 555-0100",
            "407.555.0100",
            "4075550100",
            "+14075550100",
        ] {
            assert_eq!(format_phone(raw).as_deref(), Ok("+1 407-555-0100"), "{raw}");
        }
    }

    #[test]
    fn trunk_prefix_routes_through_eleven_digit_branch() {
        assert_eq!(
            format_phone("18005551234").as_deref(),
            Ok("+1 1-800-555-1234")
        );
        assert_eq!(
            format_phone("1 (800) 555-1234").as_deref(),
            Ok("+1 1-800-555-1234")
        );
    }

    #[test]
    fn rejects_short_and_non_numeric_values() {
        assert!(matches!(
            format_phone("555-0100"),
            Err(NormalizeError::MalformedPhone { .. })
        ));
        assert!(format_phone("407-555-0100 ext 2").is_err());
        assert!(format_phone("1800555123").is_err());
        assert!(format_phone("").is_err());
    }
}
