//! Event dates: a specific date, an open bound, or a range.
//!
//! Each [`EventDate`] has a [`SortValue`] so a list of events can be put in
//! chronological order even when the exact day is unknown. Open bounds sit a
//! tenth of a day outside their anchor, which places `< 1 Jan 1 BCE` just
//! before and `> 1 Jan 1 BCE` just after `1 Jan 1 BCE` itself. A range sorts
//! like an `After` on its first date.
//!
//! ```
//! use fuzzy_era::{EventDate, parse_event_date};
//! let before: EventDate = "< 1 Jan 1 BCE".parse()?;
//! let range = parse_event_date("1 Jan 1 BCE - 1 Jan 1000 CE")?;
//! assert_eq!(before.sort_value().to_string(), "-0.1");
//! assert_eq!(range.sort_value().to_string(), "0.1");
//! assert_eq!(range.to_string(), "01 Jan 1 BCE - 01 Jan 1000 CE");
//! # Ok::<(), fuzzy_era::DateError>(())
//! ```

use std::cmp::Ordering;
use std::str::FromStr;

use crate::{DateError, FuzzyDate, Result};

/// Exact fixed-point sort key counted in tenths of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SortValue(i64);

impl SortValue {
    pub const TENTHS_PER_DAY: i64 = 10;

    pub const fn from_days(days: i64) -> Self {
        SortValue(days.saturating_mul(Self::TENTHS_PER_DAY))
    }

    pub const fn from_tenths(tenths: i64) -> Self {
        SortValue(tenths)
    }

    pub const fn tenths(self) -> i64 {
        self.0
    }

    /// The day this value falls on, rounding toward earlier days.
    pub const fn whole_days(self) -> i64 {
        self.0.div_euclid(Self::TENTHS_PER_DAY)
    }

    const fn offset(self, tenths: i64) -> Self {
        SortValue(self.0 + tenths)
    }
}

impl std::fmt::Display for SortValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_day = Self::TENTHS_PER_DAY as u64;
        f.pad(&format!("{sign}{}.{}", abs / per_day, abs % per_day))
    }
}

/// An inclusive span whose first date never sorts after its last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    first: FuzzyDate,
    last: FuzzyDate,
}

impl DateRange {
    pub fn new(first: FuzzyDate, last: FuzzyDate) -> Result<Self> {
        if first.sort_value() > last.sort_value() {
            return Err(DateError::InvertedRange);
        }
        Ok(DateRange { first, last })
    }

    pub fn first(&self) -> &FuzzyDate {
        &self.first
    }

    pub fn last(&self) -> &FuzzyDate {
        &self.last
    }

    /// Whether `date` starts inside the range, by sort value.
    pub fn contains(&self, date: &FuzzyDate) -> bool {
        (self.first.sort_value()..=self.last.sort_value()).contains(&date.sort_value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventDate {
    Specific(FuzzyDate),
    /// Some time strictly before the date.
    Before(FuzzyDate),
    /// Some time strictly after the date.
    After(FuzzyDate),
    Between(DateRange),
}

impl EventDate {
    pub fn specific(date: FuzzyDate) -> Self {
        EventDate::Specific(date)
    }

    pub fn before(date: FuzzyDate) -> Self {
        EventDate::Before(date)
    }

    pub fn after(date: FuzzyDate) -> Self {
        EventDate::After(date)
    }

    /// Fails with [`DateError::InvertedRange`] when `last` sorts before `first`.
    pub fn between(first: FuzzyDate, last: FuzzyDate) -> Result<Self> {
        DateRange::new(first, last).map(EventDate::Between)
    }

    /// The date this event is ordered by.
    pub fn anchor(&self) -> &FuzzyDate {
        match self {
            EventDate::Specific(date) | EventDate::Before(date) | EventDate::After(date) => date,
            EventDate::Between(range) => range.first(),
        }
    }

    pub fn sort_value(&self) -> SortValue {
        let adjustment = match self {
            EventDate::Specific(_) => 0,
            EventDate::Before(_) => -1,
            EventDate::After(_) | EventDate::Between(_) => 1,
        };
        SortValue::from_days(self.anchor().sort_value()).offset(adjustment)
    }

    pub fn cmp_chronological(&self, other: &EventDate) -> Ordering {
        self.sort_value().cmp(&other.sort_value())
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventDate::Specific(date) => write!(f, "{date}"),
            EventDate::Before(date) => write!(f, "< {date}"),
            EventDate::After(date) => write!(f, "> {date}"),
            EventDate::Between(range) => write!(f, "{} - {}", range.first, range.last),
        }
    }
}

impl From<FuzzyDate> for EventDate {
    fn from(date: FuzzyDate) -> Self {
        EventDate::Specific(date)
    }
}

impl FromStr for EventDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse::parse_event_date(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_value_display_keeps_sign_below_one_day() {
        assert_eq!(SortValue::from_tenths(-1).to_string(), "-0.1");
        assert_eq!(SortValue::from_tenths(-3651).to_string(), "-365.1");
        assert_eq!(SortValue::from_days(365).to_string(), "365.0");
        assert_eq!(SortValue::default().to_string(), "0.0");
    }

    #[test]
    fn sort_value_display_honours_width_and_fill() {
        let v = SortValue::from_tenths(-1);
        assert_eq!(format!("[{v:>8}]"), "[    -0.1]");
        assert_eq!(format!("[{v:<6}]"), "[-0.1  ]");
        assert_eq!(format!("[{:*^9}]", SortValue::from_days(365)), "[**365.0**]");
    }

    #[test]
    fn whole_days_rounds_toward_earlier_day() {
        assert_eq!(SortValue::from_tenths(-1).whole_days(), -1);
        assert_eq!(SortValue::from_tenths(1).whole_days(), 0);
        assert_eq!(SortValue::from_days(-365).whole_days(), -365);
    }
}
