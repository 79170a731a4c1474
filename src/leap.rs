//! Leap-year rules across the historical calendar regimes.
//!
//! Years are classified on the astronomical axis into four half-open ranges:
//!
//! | Astronomical year     | Regime      | Leap rule                              |
//! |-----------------------|-------------|----------------------------------------|
//! | `..-45`               | `NoLeap`    | never                                  |
//! | `-45..4` (46 BCE–3 CE)| `Triennial` | fixed list, every third year -43..=-7  |
//! | `4..1582`             | `Julian`    | divisible by 4                         |
//! | `1582..`              | `Gregorian` | by 4, except centuries not by 400      |
//!
//! The triennial period models the pontiffs' error of inserting a leap day
//! every third year after the Julian reform.
//!
//! ```
//! use fuzzy_era::{Era, leap::is_leap_year};
//! assert!(is_leap_year(Era::Bce, 44));
//! assert!(!is_leap_year(Era::Bce, 45));
//! assert!(is_leap_year(Era::Ce, 4));
//! assert!(is_leap_year(Era::Ce, 1100)); // Julian, no century exception
//! assert!(!is_leap_year(Era::Ce, 1700));
//! ```

use crate::Era;

/// First astronomical year of the triennial regime (46 BCE).
pub const TRIENNIAL_START: i64 = -45;
/// First astronomical year of the Julian regime (4 CE).
pub const JULIAN_START: i64 = 4;
/// First astronomical year of the Gregorian regime (1582 CE).
pub const GREGORIAN_START: i64 = 1582;

/// Astronomical years that were leap during the triennial regime
/// (44, 41, … 8 BCE).
pub const TRIENNIAL_LEAP_YEARS: [i64; 13] =
    [-43, -40, -37, -34, -31, -28, -25, -22, -19, -16, -13, -10, -7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeapRegime {
    /// Before the Julian reform; no leap days at all.
    NoLeap,
    /// The erroneous every-third-year period.
    Triennial,
    Julian,
    Gregorian,
}

impl LeapRegime {
    /// Classify an astronomical year. Each regime owns its starting year.
    pub const fn of(year: i64) -> Self {
        match year {
            GREGORIAN_START.. => LeapRegime::Gregorian,
            JULIAN_START.. => LeapRegime::Julian,
            TRIENNIAL_START.. => LeapRegime::Triennial,
            _ => LeapRegime::NoLeap,
        }
    }

    /// Apply this regime's rule to an astronomical year.
    pub fn is_leap(self, year: i64) -> bool {
        match self {
            LeapRegime::NoLeap => false,
            LeapRegime::Triennial => TRIENNIAL_LEAP_YEARS.contains(&year),
            LeapRegime::Julian => year.rem_euclid(4) == 0,
            LeapRegime::Gregorian => {
                year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
            }
        }
    }
}

/// Whether an astronomical year is a leap year.
pub fn is_astronomical_leap_year(year: i64) -> bool {
    LeapRegime::of(year).is_leap(year)
}

/// Whether `year` of `era` is a leap year under the regime in force at the time.
pub fn is_leap_year(era: Era, year: u32) -> bool {
    is_astronomical_leap_year(era.astronomical_year(year))
}

/// Number of leap years strictly before the astronomical `year`.
///
/// Counted per regime in closed form so spans of any length cost the same.
pub(crate) fn leap_years_before(year: i64) -> i64 {
    let triennial = TRIENNIAL_LEAP_YEARS.iter().filter(|&&y| y < year).count() as i64;

    // Multiples of four in [JULIAN_START, julian_end).
    let julian_end = year.clamp(JULIAN_START, GREGORIAN_START);
    let julian = (julian_end - 1).div_euclid(4) - (JULIAN_START - 1).div_euclid(4);

    let gregorian = if year > GREGORIAN_START {
        gregorian_leaps_through(year - 1) - gregorian_leaps_through(GREGORIAN_START - 1)
    } else {
        0
    };

    triennial + julian + gregorian
}

/// Gregorian leap years in `1..=year` (for positive `year`).
fn gregorian_leaps_through(year: i64) -> i64 {
    year / 4 - year / 100 + year / 400
}
