//! The BCE/CE era tag and astronomical year numbering.
//!
//! All calendar arithmetic in this crate runs on astronomical years, a single
//! signed axis that increases with time regardless of era:
//!
//! ```text
//!  2 BCE   1 BCE   1 CE   2 CE
//!   -1       0      1      2
//! ```
//!
//! ```
//! use fuzzy_era::Era;
//! assert_eq!(Era::Bce.astronomical_year(1), 0);
//! assert_eq!(Era::Bce.astronomical_year(44), -43);
//! assert_eq!(Era::Ce.astronomical_year(1582), 1582);
//! assert_eq!(Era::from_astronomical(-43), Some((Era::Bce, 44)));
//! ```

use std::str::FromStr;

use bstr::{BString, ByteSlice};

use crate::DateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Era {
    /// Before Common Era.
    Bce,
    /// Common Era.
    Ce,
}

impl Era {
    /// Map a year of this era onto the astronomical axis
    /// (`Y BCE` becomes `1 - Y`, `Y CE` stays `Y`).
    pub const fn astronomical_year(self, year: u32) -> i64 {
        match self {
            Era::Bce => 1 - year as i64,
            Era::Ce => year as i64,
        }
    }

    /// Inverse of [`Era::astronomical_year`]. Returns `None` when the year
    /// does not fit the storage type.
    pub fn from_astronomical(year: i64) -> Option<(Era, u32)> {
        if year >= 1 {
            u32::try_from(year).ok().map(|y| (Era::Ce, y))
        } else {
            1i64.checked_sub(year)
                .and_then(|y| u32::try_from(y).ok())
                .map(|y| (Era::Bce, y))
        }
    }

    /// The era code used in the text notation.
    pub const fn code(self) -> &'static str {
        match self {
            Era::Bce => "BCE",
            Era::Ce => "CE",
        }
    }

    /// Case-insensitive match of an era code.
    pub(crate) fn from_code(code: &[u8]) -> Option<Era> {
        if code.eq_ignore_ascii_case(b"BCE") {
            Some(Era::Bce)
        } else if code.eq_ignore_ascii_case(b"CE") {
            Some(Era::Ce)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Era {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Era::from_code(s.as_bytes().trim())
            .ok_or_else(|| DateError::NoDateFound(BString::from(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn astronomical_round_trip() {
        for y in -3000..=3000 {
            let (era, year) = Era::from_astronomical(y).unwrap();
            assert_eq!(era.astronomical_year(year), y);
        }
    }

    #[test]
    fn out_of_range_astronomical_years_are_none() {
        assert_eq!(Era::from_astronomical(i64::MIN), None);
        assert_eq!(Era::from_astronomical(i64::MAX), None);
        assert_eq!(Era::from_astronomical(1 - u32::MAX as i64), Some((Era::Bce, u32::MAX)));
        assert_eq!(Era::from_astronomical(-(u32::MAX as i64)), None);
    }

    #[test]
    fn parses_codes_case_insensitive() {
        assert_eq!("bce".parse::<Era>().unwrap(), Era::Bce);
        assert_eq!("Ce".parse::<Era>().unwrap(), Era::Ce);
        assert!("AD".parse::<Era>().is_err());
    }
}
