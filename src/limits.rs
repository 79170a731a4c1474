//! Range limits of the date notation.
//!
//! These are the bounds [`FuzzyDate`](crate::FuzzyDate) construction
//! enforces and the parser relies on when recognising tokens.

/// Smallest year of either era. There is no year zero; `1 BCE` is followed
/// directly by `1 CE`.
pub const MIN_YEAR: u32 = 1;

/// Months are numbered `1..=MAX_MONTH`.
pub const MAX_MONTH: u32 = 12;

/// Days of a month start at this value.
pub const MIN_DAY: u32 = 1;

/// Exact number of letters in a month abbreviation (`Jan`, `Feb`, …).
pub const MONTH_NAME_LENGTH: usize = 3;
