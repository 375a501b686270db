//! Input normalisation and layout detection.
//!
//! The layout is decided from length and character class alone, before any digit is
//! interpreted as a number.

use crate::constants::{LEGACY_DIGIT_COUNT, LEGACY_LEN, LEGACY_SUFFIXES, MODERN_LEN};
use crate::DecodeError;
use nic_types::FormatVariant;

/// Trim surrounding whitespace and uppercase, so `963562345v` matches the legacy layout.
pub fn normalise(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Classify an already-normalised input.
///
/// Lengths are counted in characters, not bytes, so a multi-byte character occupies a
/// single position.
///
/// # Errors
///
/// - [`DecodeError::Format`] if the shape matches neither layout.
/// - [`DecodeError::Encoding`] if a 10-character input ends in `V`/`X` but its first nine
///   characters are not all ASCII digits.
pub fn detect_format(normalised: &str) -> Result<FormatVariant, DecodeError> {
    let chars: Vec<char> = normalised.chars().collect();

    match chars.len() {
        LEGACY_LEN if chars.last().is_some_and(|c| LEGACY_SUFFIXES.contains(c)) => {
            if chars[..LEGACY_DIGIT_COUNT].iter().all(char::is_ascii_digit) {
                Ok(FormatVariant::Legacy)
            } else {
                Err(DecodeError::Encoding {
                    field: "legacy digits",
                })
            }
        }
        MODERN_LEN if chars.iter().all(char::is_ascii_digit) => Ok(FormatVariant::Modern),
        length => Err(DecodeError::Format { length }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalise_trims_and_uppercases() {
        assert_eq!(normalise("  963562345v\t"), "963562345V");
        assert_eq!(normalise("199635601234"), "199635601234");
    }

    #[test]
    fn detects_legacy_with_either_suffix() {
        assert_eq!(detect_format("963562345V"), Ok(FormatVariant::Legacy));
        assert_eq!(detect_format("963562345X"), Ok(FormatVariant::Legacy));
    }

    #[test]
    fn detects_modern() {
        assert_eq!(detect_format("199635601234"), Ok(FormatVariant::Modern));
    }

    #[test]
    fn legacy_shape_with_non_digits_is_an_encoding_error() {
        assert_eq!(
            detect_format("96A562345V"),
            Err(DecodeError::Encoding {
                field: "legacy digits"
            })
        );
        assert!(matches!(
            detect_format("96٣562345V"),
            Err(DecodeError::Encoding { .. })
        ));
    }

    #[test]
    fn other_shapes_are_format_errors() {
        assert_eq!(detect_format(""), Err(DecodeError::Format { length: 0 }));
        assert_eq!(detect_format("ABC"), Err(DecodeError::Format { length: 3 }));
        // Ten characters without a V/X suffix.
        assert_eq!(
            detect_format("9635623451"),
            Err(DecodeError::Format { length: 10 })
        );
        // Twelve characters that are not all digits.
        assert_eq!(
            detect_format("19963560123V"),
            Err(DecodeError::Format { length: 12 })
        );
        assert_eq!(
            detect_format("1996356012345"),
            Err(DecodeError::Format { length: 13 })
        );
    }
}
