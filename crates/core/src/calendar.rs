//! Proleptic Gregorian calendar helpers for ordinal-day arithmetic.

use crate::constants::LAST_DAY_BEFORE_LEAP_SLOT;

/// Days elapsed before the first of each month in a common year.
const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Undo the reserved 29 February slot.
///
/// NIC day fields always count February as 29 days, so in a common year every day after
/// 28 February is numbered one higher than its true ordinal.
pub fn remap_reserved_leap_day(year: i32, day_of_year: u32) -> u32 {
    if !is_leap_year(year) && day_of_year > LAST_DAY_BEFORE_LEAP_SLOT {
        day_of_year - 1
    } else {
        day_of_year
    }
}

/// Inverse of [`remap_reserved_leap_day`] for a true ordinal day.
pub fn reserve_leap_day(year: i32, ordinal: u32) -> u32 {
    if !is_leap_year(year) && ordinal > LAST_DAY_BEFORE_LEAP_SLOT {
        ordinal + 1
    } else {
        ordinal
    }
}

/// Convert a 1-based ordinal day into `(month, day)`, both 1-based.
///
/// Returns `None` if `ordinal` is 0 or beyond the end of `year`.
pub fn month_day_from_ordinal(year: i32, ordinal: u32) -> Option<(u32, u32)> {
    if ordinal == 0 || ordinal > days_in_year(year) {
        return None;
    }

    let leap = u32::from(is_leap_year(year));
    let month_start = |index: usize| CUMULATIVE_DAYS[index] + if index >= 2 { leap } else { 0 };

    let index = (0..CUMULATIVE_DAYS.len())
        .rev()
        .find(|&index| ordinal > month_start(index))?;

    Some((index as u32 + 1, ordinal - month_start(index)))
}
