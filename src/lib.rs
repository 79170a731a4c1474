//! Fuzzy historical dates and chronological sort keys.
//!
//! A [`FuzzyDate`] is a year, month or day tagged with an [`Era`], checked
//! against a calendar whose leap-year rule changes over history (no leap
//! years before 46 BCE, the triennial error until 4 CE, Julian until 1582,
//! Gregorian after). An [`EventDate`] wraps one or two fuzzy dates as a
//! specific date, an open bound or a range, and gives each a [`SortValue`].
//!
//! ```
//! use fuzzy_era::{EventDate, parse_event_date};
//!
//! let mut events: Vec<EventDate> = ["> 15 Mar 44 BCE", "44 BCE", "< 15 Mar 44 BCE", "Mar 44 BCE - 1 CE"]
//!     .iter()
//!     .map(parse_event_date)
//!     .collect::<Result<_, _>>()?;
//! events.sort_by(EventDate::cmp_chronological);
//!
//! let shown: Vec<String> = events.iter().map(ToString::to_string).collect();
//! assert_eq!(shown, ["44 BCE", "Mar 44 BCE - 1 CE", "< 15 Mar 44 BCE", "> 15 Mar 44 BCE"]);
//! # Ok::<(), fuzzy_era::DateError>(())
//! ```

pub type Result<T> = std::result::Result<T, DateError>;

mod errors;
pub use errors::DateError;

mod era;
pub use era::Era;

pub mod calendar;
pub mod leap;
pub mod limits;

mod fuzzy;
pub use fuzzy::{FuzzyDate, Precision};

mod event;
pub use event::{DateRange, EventDate, SortValue};

pub mod parse;
pub use parse::{parse_event_date, parse_fuzzy_date, probe_date, probe_event_date};

pub mod prelude;
