//! Text notation for fuzzy and event dates.
//!
//! ```text
//! date      ::= day | month | year
//! year      ::= INT " " era
//! month     ::= MON " " INT " " era
//! day       ::= INT " " MON " " INT " " era
//! era       ::= "BCE" | "CE"
//! MON       ::= "Jan".."Dec"
//! eventdate ::= "< " date | "> " date | date " - " date | date
//! ```
//!
//! Month names and eras match regardless of ASCII case. Separators are single
//! spaces; only whitespace around the whole input is ignored.
//!
//! The `probe_*` functions answer whether text has the shape of a date without
//! validating it, so `"31 Feb 2001 CE"` probes true but fails to parse.
//!
//! ```
//! use fuzzy_era::{DateError, parse_fuzzy_date, probe_date};
//! assert!(probe_date("15 mar 44 bce"));
//! assert_eq!(parse_fuzzy_date("15 mar 44 bce")?.to_string(), "15 Mar 44 BCE");
//! assert_eq!(parse_fuzzy_date("30 Feb 2001 CE"), Err(DateError::InvalidDay));
//! # Ok::<(), fuzzy_era::DateError>(())
//! ```

use bstr::{BString, ByteSlice};

use crate::calendar::month_from_abbreviation;
use crate::{DateError, Era, EventDate, FuzzyDate, Result, limits};

const BEFORE_MARKER: &[u8] = b"< ";
const AFTER_MARKER: &[u8] = b"> ";
const RANGE_SEPARATOR: &str = " - ";

/// Tokens of a date that matched the grammar but are not yet validated.
struct DateTokens<'a> {
    day: Option<&'a [u8]>,
    month: Option<&'a [u8]>,
    year: &'a [u8],
    era: Era,
}

enum EventShape<'a> {
    Specific(&'a [u8]),
    Before(&'a [u8]),
    After(&'a [u8]),
    Between(&'a [u8], &'a [u8]),
}

fn is_integer(token: &[u8]) -> bool {
    !token.is_empty() && token.iter().all(u8::is_ascii_digit)
}

fn is_month_word(token: &[u8]) -> bool {
    token.len() == limits::MONTH_NAME_LENGTH && token.iter().all(u8::is_ascii_alphabetic)
}

fn scan_date(input: &[u8]) -> Option<DateTokens<'_>> {
    let tokens: Vec<&[u8]> = input.split_str(" ").collect();
    let (era, rest) = tokens.split_last()?;
    let era = Era::from_code(era)?;
    let (day, month, year) = match rest {
        [year] => (None, None, *year),
        [month, year] => (None, Some(*month), *year),
        [day, month, year] => (Some(*day), Some(*month), *year),
        _ => return None,
    };
    if !is_integer(year) || !day.is_none_or(is_integer) || !month.is_none_or(is_month_word) {
        return None;
    }
    Some(DateTokens {
        day,
        month,
        year,
        era,
    })
}

// Before and after are tried ahead of the range split.
fn split_event(input: &[u8]) -> EventShape<'_> {
    if let Some(rest) = input.strip_prefix(BEFORE_MARKER) {
        EventShape::Before(rest)
    } else if let Some(rest) = input.strip_prefix(AFTER_MARKER) {
        EventShape::After(rest)
    } else if let Some((first, last)) = input.split_once_str(RANGE_SEPARATOR) {
        EventShape::Between(first, last)
    } else {
        EventShape::Specific(input)
    }
}

fn parse_number(token: &[u8]) -> Result<u32> {
    token
        .iter()
        .try_fold(0u32, |acc, &digit| {
            acc.checked_mul(10)?.checked_add(u32::from(digit - b'0'))
        })
        .ok_or_else(|| DateError::NumberTooLarge(BString::from(token)))
}

fn date_from(input: &[u8]) -> Result<FuzzyDate> {
    let Some(tokens) = scan_date(input) else {
        log::debug!("no date found in {:?}", input.as_bstr());
        return Err(DateError::NoDateFound(BString::from(input)));
    };
    let month = match tokens.month {
        Some(name) => Some(
            month_from_abbreviation(name)
                .ok_or_else(|| DateError::InvalidMonthName(BString::from(name)))?,
        ),
        None => None,
    };
    let year = parse_number(tokens.year)?;
    match (tokens.day, month) {
        (Some(day), Some(month)) => {
            FuzzyDate::from_day(parse_number(day)?, month.into(), year, tokens.era)
        }
        (None, Some(month)) => FuzzyDate::from_month(month.into(), year, tokens.era),
        _ => FuzzyDate::from_year(year, tokens.era),
    }
}

/// Whether the text has the shape of a fuzzy date.
pub fn probe_date(input: impl AsRef<[u8]>) -> bool {
    scan_date(input.as_ref().trim()).is_some()
}

/// Whether the text has the shape of an event date.
pub fn probe_event_date(input: impl AsRef<[u8]>) -> bool {
    match split_event(input.as_ref().trim()) {
        EventShape::Specific(date) | EventShape::Before(date) | EventShape::After(date) => {
            scan_date(date).is_some()
        }
        EventShape::Between(first, last) => scan_date(first).is_some() && scan_date(last).is_some(),
    }
}

/// Parse a year, month or day in the text notation.
pub fn parse_fuzzy_date(input: impl AsRef<[u8]>) -> Result<FuzzyDate> {
    date_from(input.as_ref().trim())
}

/// Parse an event date: `< date`, `> date`, `date - date` or a plain date.
///
/// ```
/// use fuzzy_era::{DateError, EventDate, parse_event_date};
/// assert!(matches!(parse_event_date("> Mar 44 BCE")?, EventDate::After(_)));
/// assert_eq!(
///     parse_event_date("1 CE - 1 BCE"),
///     Err(DateError::InvertedRange)
/// );
/// # Ok::<(), fuzzy_era::DateError>(())
/// ```
pub fn parse_event_date(input: impl AsRef<[u8]>) -> Result<EventDate> {
    match split_event(input.as_ref().trim()) {
        EventShape::Before(date) => {
            log::trace!("parsing open lower bound {:?}", date.as_bstr());
            date_from(date).map(EventDate::Before)
        }
        EventShape::After(date) => {
            log::trace!("parsing open upper bound {:?}", date.as_bstr());
            date_from(date).map(EventDate::After)
        }
        EventShape::Between(first, last) => {
            log::trace!("parsing range {:?} to {:?}", first.as_bstr(), last.as_bstr());
            EventDate::between(date_from(first)?, date_from(last)?)
        }
        EventShape::Specific(date) => date_from(date).map(EventDate::Specific),
    }
}
