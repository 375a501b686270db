//! Encoding a birth date and sex as a NIC number.
//!
//! This is the inverse of decoding and is used to pre-fill forms and to generate test
//! numbers. It knows nothing about real serial allocation: the caller supplies the
//! trailing digits.
//!
//! Layouts written:
//! - Modern: `YYYY` + `DDD` + five serial digits.
//! - Legacy: `YY` + `DDD` + four serial digits + `V`.
//!
//! `DDD` is the ordinal day with a slot reserved for 29 February in common years, plus 500
//! for female holders.

use crate::calendar::reserve_leap_day;
use crate::constants::{
    DEFAULT_LEGACY_CENTURY, FEMALE_DAY_OFFSET, LEGACY_ENCODE_SUFFIX, MAX_LEGACY_SERIAL,
    MAX_MODERN_SERIAL, MAX_MODERN_YEAR,
};
use crate::{NicError, NicResult};
use chrono::{Datelike, NaiveDate};
use nic_types::{FormatVariant, Sex};

/// Encode with the default legacy century (1900).
///
/// # Errors
///
/// Returns [`NicError::InvalidInput`] if the year or serial does not fit the layout.
pub fn encode(
    birth_date: NaiveDate,
    sex: Sex,
    format: FormatVariant,
    serial: u32,
) -> NicResult<String> {
    encode_with_century(birth_date, sex, format, serial, DEFAULT_LEGACY_CENTURY)
}

pub(crate) fn encode_with_century(
    birth_date: NaiveDate,
    sex: Sex,
    format: FormatVariant,
    serial: u32,
    legacy_century: i32,
) -> NicResult<String> {
    let year = birth_date.year();
    let mut day = reserve_leap_day(year, birth_date.ordinal());
    if sex == Sex::Female {
        day += FEMALE_DAY_OFFSET;
    }

    match format {
        FormatVariant::Modern => {
            if !(0..=MAX_MODERN_YEAR).contains(&year) {
                return Err(NicError::InvalidInput(format!(
                    "year {year} does not fit the four-digit modern year field"
                )));
            }
            if serial > MAX_MODERN_SERIAL {
                return Err(NicError::InvalidInput(format!(
                    "serial {serial} exceeds {MAX_MODERN_SERIAL} for modern numbers"
                )));
            }
            Ok(format!("{year:04}{day:03}{serial:05}"))
        }
        FormatVariant::Legacy => {
            let last_year = legacy_century + 99;
            if !(legacy_century..=last_year).contains(&year) {
                return Err(NicError::InvalidInput(format!(
                    "year {year} is outside the legacy range {legacy_century}-{last_year}"
                )));
            }
            if serial > MAX_LEGACY_SERIAL {
                return Err(NicError::InvalidInput(format!(
                    "serial {serial} exceeds {MAX_LEGACY_SERIAL} for legacy numbers"
                )));
            }
            Ok(format!(
                "{:02}{day:03}{serial:04}{LEGACY_ENCODE_SUFFIX}",
                year - legacy_century
            ))
        }
    }
}
