//! The NIC decoding pipeline.
//!
//! Decoding runs in fixed stages:
//! 1. normalise and detect the layout ([`crate::format`])
//! 2. extract the year and raw day fields ([`EncodedFields`])
//! 3. split the female offset from the day field
//! 4. undo the reserved 29 February slot in common years
//! 5. check the day exists in the year
//! 6. build the calendar date
//!
//! Every stage is pure; [`Decoder`] holds only immutable configuration and can be shared
//! across threads freely.

use crate::calendar::{days_in_year, month_day_from_ordinal, remap_reserved_leap_day};
use crate::config::DecoderConfig;
use crate::constants::{FEMALE_DAY_OFFSET, LEGACY_SERIAL};
use crate::encode::encode_with_century;
use crate::fields::EncodedFields;
use crate::format::{detect_format, normalise};
use crate::{DecodeError, NicError, NicResult};
use chrono::{Datelike, NaiveDate};
use nic_types::{FormatVariant, Sex};
use serde::{Deserialize, Serialize};

/// A successfully decoded NIC number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIdentity {
    /// Always a real date in the proleptic Gregorian calendar.
    pub birth_date: NaiveDate,
    pub sex: Sex,
    /// The layout the number was written in.
    pub format: FormatVariant,
}

impl DecodedIdentity {
    /// Completed years of age on `on`.
    ///
    /// Returns `None` if `on` is before the birth date.
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        if on < self.birth_date {
            return None;
        }

        let mut years = on.year() - self.birth_date.year();
        if (on.month(), on.day()) < (self.birth_date.month(), self.birth_date.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

/// NIC decoding operations.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Run the layout detection and field extraction stages only.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Format`] or [`DecodeError::Encoding`].
    pub fn decode_fields(&self, raw: &str) -> Result<EncodedFields, DecodeError> {
        let normalised = normalise(raw);
        let format = detect_format(&normalised)?;
        EncodedFields::extract(&normalised, format, self.config.legacy_century())
    }

    /// Decode a NIC number into its birth date and sex.
    ///
    /// Accepts any string. Surrounding whitespace is ignored and the legacy suffix is
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Format`] if the input matches neither layout.
    /// - [`DecodeError::Encoding`] if a numeric field holds non-digits.
    /// - [`DecodeError::Range`] if the day field names no real day of the decoded year. The
    ///   sex is still reported.
    pub fn decode(&self, raw: &str) -> Result<DecodedIdentity, DecodeError> {
        let result = self
            .decode_fields(raw)
            .and_then(|fields| identity_from_fields(&fields));

        if let Err(err) = &result {
            // Never log the number itself.
            tracing::debug!(
                length = raw.trim().chars().count(),
                kind = %err.kind(),
                "rejected NIC number"
            );
        }
        result
    }

    /// Encode a birth date and sex as a NIC number in `format`.
    ///
    /// See the `encode` module for the layout and the meaning of `serial`.
    ///
    /// # Errors
    ///
    /// Returns [`NicError::InvalidInput`] if the year or serial does not fit the layout.
    pub fn encode(
        &self,
        birth_date: NaiveDate,
        sex: Sex,
        format: FormatVariant,
        serial: u32,
    ) -> NicResult<String> {
        encode_with_century(
            birth_date,
            sex,
            format,
            serial,
            self.config.legacy_century(),
        )
    }

    /// Rewrite a legacy number in the modern 12-digit layout.
    ///
    /// The year is expanded to four digits, the day field is kept as written and a `0` is
    /// inserted before the four serial digits. Modern input is returned normalised and
    /// unchanged. The input must decode successfully.
    ///
    /// # Errors
    ///
    /// Returns [`NicError::Decode`] if the input does not decode.
    pub fn to_modern(&self, raw: &str) -> NicResult<String> {
        let normalised = normalise(raw);
        let identity = self.decode(&normalised)?;

        match identity.format {
            FormatVariant::Modern => Ok(normalised),
            FormatVariant::Legacy => {
                let fields = self.decode_fields(&normalised)?;
                let serial = normalised.get(LEGACY_SERIAL).ok_or_else(|| {
                    NicError::InvalidInput("legacy number is missing its serial digits".into())
                })?;
                Ok(format!(
                    "{:04}{:03}0{serial}",
                    fields.century_year, fields.day_of_year_raw
                ))
            }
        }
    }
}

/// Stages 3 to 6.
fn identity_from_fields(fields: &EncodedFields) -> Result<DecodedIdentity, DecodeError> {
    let year = fields.century_year;
    let (sex, day_of_year) = split_sex(fields.day_of_year_raw);
    let day_of_year = remap_reserved_leap_day(year, day_of_year);

    let range_error = DecodeError::Range {
        year,
        day_of_year,
        sex,
    };

    if day_of_year == 0 || day_of_year > days_in_year(year) {
        return Err(range_error);
    }

    let birth_date = month_day_from_ordinal(year, day_of_year)
        .and_then(|(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or(range_error)?;

    Ok(DecodedIdentity {
        birth_date,
        sex,
        format: fields.format,
    })
}

fn split_sex(day_of_year_raw: u32) -> (Sex, u32) {
    if day_of_year_raw > FEMALE_DAY_OFFSET {
        (Sex::Female, day_of_year_raw - FEMALE_DAY_OFFSET)
    } else {
        (Sex::Male, day_of_year_raw)
    }
}
