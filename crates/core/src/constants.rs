//! Constants used throughout the NIC core crate.
//!
//! Field offsets are expressed in characters of the normalised (trimmed, uppercased) input.

/// Total length of a legacy number: 9 digits and a `V`/`X` suffix.
pub const LEGACY_LEN: usize = 10;

/// Total length of a modern number: 12 digits.
pub const MODERN_LEN: usize = 12;

/// Number of leading digits in a legacy number.
pub const LEGACY_DIGIT_COUNT: usize = LEGACY_LEN - 1;

/// Accepted legacy suffix letters (after uppercasing).
pub const LEGACY_SUFFIXES: [char; 2] = ['V', 'X'];

/// Suffix written by the encoder for legacy numbers.
pub const LEGACY_ENCODE_SUFFIX: char = 'V';

/// Two-digit year field of a legacy number.
pub const LEGACY_YEAR: std::ops::Range<usize> = 0..2;

/// Day-of-year field of a legacy number.
pub const LEGACY_DAY: std::ops::Range<usize> = 2..5;

/// Serial and check digits of a legacy number.
pub const LEGACY_SERIAL: std::ops::Range<usize> = 5..9;

/// Four-digit year field of a modern number.
pub const MODERN_YEAR: std::ops::Range<usize> = 0..4;

/// Day-of-year field of a modern number.
pub const MODERN_DAY: std::ops::Range<usize> = 4..7;

/// Century applied to two-digit legacy years unless configured otherwise.
pub const DEFAULT_LEGACY_CENTURY: i32 = 1900;

/// Offset added to the day-of-year field for female holders.
pub const FEMALE_DAY_OFFSET: u32 = 500;

/// Last ordinal day that is unaffected by the reserved 29 February slot.
pub const LAST_DAY_BEFORE_LEAP_SLOT: u32 = 59;

/// Largest year representable in the four-digit modern year field.
pub const MAX_MODERN_YEAR: i32 = 9999;

/// Largest serial accepted by the encoder for each layout.
pub const MAX_MODERN_SERIAL: u32 = 99_999;
pub const MAX_LEGACY_SERIAL: u32 = 9_999;

/// Environment variable holding the legacy century override.
pub const LEGACY_CENTURY_ENV: &str = "NIC_LEGACY_CENTURY";
