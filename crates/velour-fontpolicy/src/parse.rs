//! Font-name string parsing.
//!
//! Desktop environments publish the font preference as a single
//! space-separated string, e.g. `"DejaVu Sans Bold 11"`. Interpretation is
//! token-by-token and order-independent: `bold` and `italic` keywords set
//! style flags, an all-digit token is the point size, and everything else
//! accumulates into the family name.

use crate::error::{Error, Result};
use crate::types::{FontDescription, DEFAULT_SIZE_POINTS, GENERIC_FAMILY};

/// Parse a desktop font-name string into a [`FontDescription`].
///
/// Never fails: a missing family falls back to [`GENERIC_FAMILY`] and an
/// unparsable size token falls back to [`DEFAULT_SIZE_POINTS`]. When
/// several numeric tokens appear, the last one wins.
///
/// # Example
///
/// ```
/// use velour_fontpolicy::parse::parse_font_name;
///
/// let desc = parse_font_name("Sans Bold Italic 11");
/// assert_eq!(desc.family, "Sans");
/// assert!(desc.bold);
/// assert!(desc.italic);
/// assert_eq!(desc.size_points, 11);
/// ```
pub fn parse_font_name(name: &str) -> FontDescription {
    let mut family = String::new();
    let mut bold = false;
    let mut italic = false;
    let mut size_points = DEFAULT_SIZE_POINTS;

    for word in name.split_whitespace() {
        if word.eq_ignore_ascii_case("italic") {
            italic = true;
        } else if word.eq_ignore_ascii_case("bold") {
            bold = true;
        } else if word.bytes().all(|b| b.is_ascii_digit()) {
            size_points = match parse_size_token(word) {
                Ok(size) => size,
                Err(err) => {
                    tracing::debug!(
                        target: "velour_fontpolicy",
                        error = %err,
                        "falling back to default point size"
                    );
                    DEFAULT_SIZE_POINTS
                }
            };
        } else {
            if !family.is_empty() {
                family.push(' ');
            }
            family.push_str(word);
        }
    }

    if family.is_empty() {
        family = GENERIC_FAMILY.to_string();
    }

    FontDescription {
        family,
        bold,
        italic,
        size_points,
    }
}

/// Parse an all-digit token as a point size.
///
/// A token can pass the digit check and still fail here by overflowing;
/// callers recover with [`DEFAULT_SIZE_POINTS`].
pub fn parse_size_token(token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .map_err(|e| Error::malformed_size_token(token, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_preference() {
        let desc = parse_font_name("Sans Bold Italic 11");
        assert_eq!(desc.family, "Sans");
        assert!(desc.bold);
        assert!(desc.italic);
        assert_eq!(desc.size_points, 11);
    }

    #[test]
    fn test_token_order_does_not_matter() {
        let reordered = parse_font_name("11 Italic Sans Bold");
        assert_eq!(reordered.family, "Sans");
        assert!(reordered.bold);
        assert!(reordered.italic);
        assert_eq!(reordered.size_points, 11);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let desc = parse_font_name("Cantarell BOLD iTaLiC 10");
        assert!(desc.bold);
        assert!(desc.italic);
        assert_eq!(desc.family, "Cantarell");
    }

    #[test]
    fn test_multi_word_family() {
        let desc = parse_font_name("DejaVu Sans Mono 12");
        assert_eq!(desc.family, "DejaVu Sans Mono");
        assert!(!desc.bold);
        assert_eq!(desc.size_points, 12);
    }

    #[test]
    fn test_last_numeric_token_wins() {
        let desc = parse_font_name("Sans 11 13");
        assert_eq!(desc.size_points, 13);
    }

    #[test]
    fn test_empty_string_gives_defaults() {
        let desc = parse_font_name("");
        assert_eq!(desc.family, GENERIC_FAMILY);
        assert!(!desc.bold);
        assert!(!desc.italic);
        assert_eq!(desc.size_points, DEFAULT_SIZE_POINTS);
    }

    #[test]
    fn test_no_family_tokens_defaults_family() {
        let desc = parse_font_name("Bold 14");
        assert_eq!(desc.family, GENERIC_FAMILY);
        assert!(desc.bold);
        assert_eq!(desc.size_points, 14);
    }

    #[test]
    fn test_overflowing_size_falls_back() {
        // All digits, but far past u32::MAX.
        let desc = parse_font_name("Sans 99999999999999999999");
        assert_eq!(desc.size_points, DEFAULT_SIZE_POINTS);
        assert_eq!(desc.family, "Sans");
    }

    #[test]
    fn test_mixed_alphanumeric_token_joins_family() {
        // "Nimbus15" is not all digits, so it is family text.
        let desc = parse_font_name("Nimbus15 10");
        assert_eq!(desc.family, "Nimbus15");
        assert_eq!(desc.size_points, 10);
    }

    #[test]
    fn test_size_token_error_names_token() {
        let err = parse_size_token("99999999999999999999").unwrap_err();
        assert!(err.to_string().contains("99999999999999999999"));
    }
}
