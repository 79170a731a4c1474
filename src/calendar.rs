//! Calendar arithmetic layered on the leap-year rules.
//!
//! These functions assume their inputs were already range checked by
//! [`FuzzyDate`](crate::FuzzyDate) construction. They never panic: a month
//! outside `1..=12` simply has zero days.

use crate::{Era, leap};

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Invariant three letter month abbreviations (index 0 unused).
pub(crate) const MONTH_ABBREVIATIONS: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const FEBRUARY: u8 = 2;

/// Days in `month` of `year`; February gains a day in leap years.
///
/// ```
/// use fuzzy_era::{Era, calendar::days_in_month};
/// assert_eq!(days_in_month(Era::Ce, 2000, 2), 29);
/// assert_eq!(days_in_month(Era::Ce, 1900, 2), 28);
/// assert_eq!(days_in_month(Era::Bce, 8, 2), 29);
/// assert_eq!(days_in_month(Era::Ce, 2001, 13), 0);
/// ```
pub fn days_in_month(era: Era, year: u32, month: u8) -> u8 {
    let days = DAYS_PER_MONTH.get(month as usize).copied().unwrap_or(0);
    if month == FEBRUARY && leap::is_leap_year(era, year) {
        days + 1
    } else {
        days
    }
}

pub fn days_in_year(era: Era, year: u32) -> u16 {
    if leap::is_leap_year(era, year) { 366 } else { 365 }
}

/// One-based ordinal of the day within its year.
pub fn day_of_year(era: Era, year: u32, month: u8, day: u8) -> u16 {
    let preceding: u16 = (1..month.min(13))
        .map(|m| days_in_month(era, year, m) as u16)
        .sum();
    preceding + day as u16
}

/// Days left in the year after the given day (31 Dec gives 0).
pub fn days_remaining_in_year(era: Era, year: u32, month: u8, day: u8) -> i64 {
    days_in_year(era, year) as i64 - day_of_year(era, year, month, day) as i64
}

/// Total days in all astronomical years in `start..end`.
///
/// Equal to summing the length of every year in the span, without the walk.
/// Spans too long for an `i64` day count saturate at `i64::MAX`.
pub fn days_between(start: i64, end: i64) -> i64 {
    if end <= start {
        return 0;
    }
    let years = i64::try_from(end.abs_diff(start)).unwrap_or(i64::MAX);
    let leaps = leap::leap_years_before(end) - leap::leap_years_before(start);
    years.saturating_mul(365).saturating_add(leaps)
}

/// The abbreviation for a month number, if it names a month.
pub fn month_abbreviation(month: u8) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_ABBREVIATIONS[month as usize]),
        _ => None,
    }
}

/// Resolve a three letter month abbreviation, ignoring ASCII case.
///
/// ```
/// use fuzzy_era::calendar::month_from_abbreviation;
/// assert_eq!(month_from_abbreviation(b"jAN"), Some(1));
/// assert_eq!(month_from_abbreviation(b"Dec"), Some(12));
/// assert_eq!(month_from_abbreviation(b"Xyz"), None);
/// ```
pub fn month_from_abbreviation(name: &[u8]) -> Option<u8> {
    MONTH_ABBREVIATIONS
        .iter()
        .skip(1)
        .position(|abbr| abbr.as_bytes().eq_ignore_ascii_case(name))
        .map(|idx| idx as u8 + 1)
}
