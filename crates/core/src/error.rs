use nic_types::Sex;
use std::fmt;

/// Why a NIC number could not be decoded.
///
/// Malformed input is an expected outcome, so every variant is returned rather than
/// panicked. `Range` still carries the sex, which is determined before the date is
/// checked.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error(
        "unrecognised NIC format: expected 9 digits followed by V/X, or 12 digits (got {length} characters)"
    )]
    Format { length: usize },
    #[error("NIC {field} must contain only digits")]
    Encoding { field: &'static str },
    #[error("day-of-year {day_of_year} does not exist in {year}")]
    Range {
        year: i32,
        day_of_year: u32,
        sex: Sex,
    },
}

/// Tag for the three [`DecodeError`] variants, without their payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    Format,
    Encoding,
    Range,
}

impl DecodeErrorKind {
    /// Stable machine-readable name, used in API responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            DecodeErrorKind::Format => "format_error",
            DecodeErrorKind::Encoding => "encoding_error",
            DecodeErrorKind::Range => "range_error",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::Format { .. } => DecodeErrorKind::Format,
            DecodeError::Encoding { .. } => DecodeErrorKind::Encoding,
            DecodeError::Range { .. } => DecodeErrorKind::Range,
        }
    }

    /// The sex recovered before the failure, if any. Only `Range` carries one.
    pub fn sex(&self) -> Option<Sex> {
        match self {
            DecodeError::Range { sex, .. } => Some(*sex),
            _ => None,
        }
    }
}

/// Errors for operations other than decoding itself (configuration, encoding).
#[derive(Debug, thiserror::Error)]
pub enum NicError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type NicResult<T> = std::result::Result<T, NicError>;
