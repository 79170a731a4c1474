//! Possibly partial historical dates.
//!
//! A [`FuzzyDate`] is a year, a month of a year, or a full day, tagged with an
//! [`Era`]. It can only be built through the validating constructors, so a
//! value in hand is always a real date of the calendar described in
//! [`leap`](crate::leap).
//!
//! # Sort value
//!
//! [`FuzzyDate::sort_value`] is a signed day number with `1 Jan 1 BCE` as
//! day 0. A partial date counts as the first day it covers.
//!
//! ```
//! use fuzzy_era::{Era, FuzzyDate};
//! let d = FuzzyDate::from_day(1, 1, 5, Era::Ce)?;
//! assert_eq!(d.sort_value(), 1826);
//! assert_eq!(d.to_string(), "01 Jan 5 CE");
//! assert_eq!(FuzzyDate::from_year(1, Era::Bce)?.sort_value(), 0);
//! # Ok::<(), fuzzy_era::DateError>(())
//! ```

use std::cmp::Ordering;
use std::str::FromStr;

use crate::calendar::{self, day_of_year, days_between, days_in_year, days_remaining_in_year};
use crate::{DateError, Era, Result, limits};

/// How much of a [`FuzzyDate`] is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Precision {
    Year,
    Month,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuzzyDate {
    day: Option<u8>,
    month: Option<u8>,
    year: u32,
    era: Era,
}

impl FuzzyDate {
    /// A whole year, e.g. `44 BCE`.
    pub fn from_year(year: u32, era: Era) -> Result<Self> {
        Self::validated(None, None, year, era)
    }

    /// A month of a year, e.g. `Mar 44 BCE`.
    pub fn from_month(month: u32, year: u32, era: Era) -> Result<Self> {
        Self::validated(None, Some(month), year, era)
    }

    /// A single day, e.g. `15 Mar 44 BCE`.
    ///
    /// ```
    /// use fuzzy_era::{DateError, Era, FuzzyDate};
    /// assert!(FuzzyDate::from_day(29, 2, 2000, Era::Ce).is_ok());
    /// assert_eq!(FuzzyDate::from_day(29, 2, 1900, Era::Ce), Err(DateError::InvalidDay));
    /// ```
    pub fn from_day(day: u32, month: u32, year: u32, era: Era) -> Result<Self> {
        Self::validated(Some(day), Some(month), year, era)
    }

    // Checks run year, month, day and stop at the first failure.
    fn validated(day: Option<u32>, month: Option<u32>, year: u32, era: Era) -> Result<Self> {
        if year < limits::MIN_YEAR {
            return Err(DateError::YearOutOfRange);
        }
        let month = match month {
            Some(m) if (1..=limits::MAX_MONTH).contains(&m) => Some(m as u8),
            Some(_) => return Err(DateError::MonthOutOfRange),
            None => None,
        };
        let max_day = calendar::days_in_month(era, year, month.unwrap_or(1)) as u32;
        let day = match day {
            Some(d) if (limits::MIN_DAY..=max_day).contains(&d) => Some(d as u8),
            Some(_) => return Err(DateError::InvalidDay),
            None => None,
        };
        Ok(FuzzyDate {
            day,
            month,
            year,
            era,
        })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn precision(&self) -> Precision {
        match (self.month, self.day) {
            (Some(_), Some(_)) => Precision::Day,
            (Some(_), None) => Precision::Month,
            _ => Precision::Year,
        }
    }

    pub fn astronomical_year(&self) -> i64 {
        self.era.astronomical_year(self.year)
    }

    /// Signed day offset from `1 Jan 1 BCE`; missing month and day count as 1.
    ///
    /// BCE years count backwards so that `31 Dec 2 BCE` is -1 and
    /// `1 Jan 2 BCE` is -365, while CE days continue after the 365 days of
    /// `1 BCE`.
    pub fn sort_value(&self) -> i64 {
        let month = self.month.unwrap_or(1);
        let day = self.day.unwrap_or(1);
        match (self.era, self.year) {
            (Era::Bce, 1) => day_of_year(Era::Bce, 1, month, day) as i64 - 1,
            (Era::Bce, year) => {
                // Full years between the target and 1 BCE, exclusive of both.
                let later_years = days_between(self.astronomical_year() + 1, 0);
                let rest = days_remaining_in_year(Era::Bce, year, month, day) + 1;
                -(later_years + rest)
            }
            (Era::Ce, year) => {
                let earlier_years = days_between(1, year as i64);
                let elapsed = day_of_year(Era::Ce, year, month, day) as i64 - 1;
                earlier_years + elapsed + days_in_year(Era::Bce, 1) as i64
            }
        }
    }

    /// Convert a full date in the Gregorian regime to a chrono date.
    ///
    /// Returns `None` for partial dates and for anything before 1582 CE,
    /// where chrono's proleptic Gregorian calendar disagrees with this one.
    #[cfg(feature = "chrono")]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        if self.astronomical_year() < crate::leap::GREGORIAN_START {
            return None;
        }
        let year = i32::try_from(self.year).ok()?;
        chrono::NaiveDate::from_ymd_opt(year, self.month? as u32, self.day? as u32)
    }
}

impl PartialOrd for FuzzyDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Chronological by first covered day; on a tie the coarser date sorts first.
impl Ord for FuzzyDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_value()
            .cmp(&other.sort_value())
            .then_with(|| self.precision().cmp(&other.precision()))
    }
}

impl std::fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(day) = self.day {
            write!(f, "{day:02} ")?;
        }
        if let Some(name) = self.month.and_then(calendar::month_abbreviation) {
            write!(f, "{name} ")?;
        }
        write!(f, "{} {}", self.year, self.era)
    }
}

impl FromStr for FuzzyDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse::parse_fuzzy_date(s)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for FuzzyDate {
    type Error = DateError;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        if (d.year() as i64) < crate::leap::GREGORIAN_START {
            return Err(DateError::OutsideGregorianRegime);
        }
        FuzzyDate::from_day(d.day(), d.month(), d.year() as u32, Era::Ce)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<&FuzzyDate> for chrono::NaiveDate {
    type Error = DateError;

    fn try_from(d: &FuzzyDate) -> Result<Self> {
        d.to_naive_date().ok_or(DateError::OutsideGregorianRegime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_sort_value(d: &FuzzyDate) -> i64 {
        let month = d.month.unwrap_or(1);
        let day = d.day.unwrap_or(1);
        match (d.era, d.year) {
            (Era::Bce, 1) => day_of_year(Era::Bce, 1, month, day) as i64 - 1,
            (Era::Bce, year) => {
                let mut total = 0;
                for y in 2..year {
                    total += days_in_year(Era::Bce, y) as i64;
                }
                -(total + days_remaining_in_year(Era::Bce, year, month, day) + 1)
            }
            (Era::Ce, year) => {
                let mut total = days_in_year(Era::Bce, 1) as i64;
                for y in 1..year {
                    total += days_in_year(Era::Ce, y) as i64;
                }
                total + day_of_year(Era::Ce, year, month, day) as i64 - 1
            }
        }
    }

    #[test]
    fn sort_value_matches_year_by_year_walk() {
        for era in [Era::Bce, Era::Ce] {
            for year in (1..120).chain([499, 1581, 1582, 1583, 2000]) {
                for (day, month) in [(1, 1), (28, 2), (1, 3), (31, 12)] {
                    let d = FuzzyDate::from_day(day, month, year, era).unwrap();
                    assert_eq!(d.sort_value(), walk_sort_value(&d), "{d}");
                }
            }
        }
    }

    #[test]
    fn validation_short_circuits_on_year_first() {
        assert_eq!(
            FuzzyDate::from_day(99, 99, 0, Era::Ce),
            Err(DateError::YearOutOfRange)
        );
        assert_eq!(
            FuzzyDate::from_day(99, 13, 1, Era::Ce),
            Err(DateError::MonthOutOfRange)
        );
        assert_eq!(FuzzyDate::from_day(0, 1, 1, Era::Ce), Err(DateError::InvalidDay));
    }

    #[test]
    fn coarser_date_sorts_first_on_tie() {
        let year = FuzzyDate::from_year(1, Era::Bce).unwrap();
        let month = FuzzyDate::from_month(1, 1, Era::Bce).unwrap();
        let day = FuzzyDate::from_day(1, 1, 1, Era::Bce).unwrap();
        assert!(year < month);
        assert!(month < day);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_bridge_rejects_pre_gregorian() {
        let d = FuzzyDate::from_day(29, 2, 2024, Era::Ce).unwrap();
        let nd = d.to_naive_date().unwrap();
        assert_eq!(FuzzyDate::try_from(nd).unwrap(), d);

        let julian = FuzzyDate::from_day(29, 2, 1500, Era::Ce).unwrap();
        assert_eq!(julian.to_naive_date(), None);
        let early = chrono::NaiveDate::from_ymd_opt(1500, 3, 1).unwrap();
        assert_eq!(
            FuzzyDate::try_from(early),
            Err(DateError::OutsideGregorianRegime)
        );
    }
}
