//! Crate prelude: the types and parsing functions most callers need.
//!
//! ```
//! use fuzzy_era::prelude::*;
//!
//! let ides = FuzzyDate::from_day(15, 3, 44, Era::Bce)?;
//! let after = EventDate::after(ides);
//! assert_eq!(after.to_string(), "> 15 Mar 44 BCE");
//! assert!(probe_event_date("> 15 Mar 44 BCE"));
//! assert_eq!(parse_event_date("> 15 mar 44 bce")?, after);
//! # Ok::<(), DateError>(())
//! ```
//!
//! Calendar arithmetic and the leap-year regimes stay in their own modules
//! (`fuzzy_era::calendar`, `fuzzy_era::leap`).

pub use crate::{
    // Core types
    DateError,
    DateRange,
    Era,
    EventDate,
    FuzzyDate,
    Precision,
    Result,
    SortValue,
    // Text notation
    parse_event_date,
    parse_fuzzy_date,
    probe_date,
    probe_event_date,
};
