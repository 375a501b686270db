//! Extraction of the numeric fields from a classified NIC number.

use crate::constants::{LEGACY_DAY, LEGACY_YEAR, MODERN_DAY, MODERN_YEAR};
use crate::DecodeError;
use nic_types::FormatVariant;
use std::ops::Range;

/// The year and raw day-of-year fields, before sex and leap-year adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedFields {
    pub format: FormatVariant,
    /// Four-digit year, with the legacy century already applied.
    pub century_year: i32,
    /// The three-digit day field exactly as written (0..=999), including any female offset.
    pub day_of_year_raw: u32,
}

impl EncodedFields {
    /// Extract fields from a normalised input already classified as `format`.
    ///
    /// `legacy_century` is added to the two-digit year of legacy numbers and ignored for
    /// modern ones.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Encoding`] if a field is missing or holds anything other than
    /// ASCII digits. Detection already guarantees this, so it only guards against callers
    /// passing a mismatched `format`.
    pub fn extract(
        normalised: &str,
        format: FormatVariant,
        legacy_century: i32,
    ) -> Result<Self, DecodeError> {
        let (century_year, day_of_year_raw) = match format {
            FormatVariant::Legacy => {
                let yy = digits(normalised, LEGACY_YEAR, "year")?;
                let day = digits(normalised, LEGACY_DAY, "day-of-year")?;
                (legacy_century + yy as i32, day)
            }
            FormatVariant::Modern => {
                let year = digits(normalised, MODERN_YEAR, "year")?;
                let day = digits(normalised, MODERN_DAY, "day-of-year")?;
                (year as i32, day)
            }
        };

        Ok(Self {
            format,
            century_year,
            day_of_year_raw,
        })
    }
}

fn digits(s: &str, range: Range<usize>, field: &'static str) -> Result<u32, DecodeError> {
    s.get(range)
        .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|d| d.parse::<u32>().ok())
        .ok_or(DecodeError::Encoding { field })
}
