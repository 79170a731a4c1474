use bstr::BString;

/// Every way building or parsing a date can fail.
///
/// The messages are meant to be shown to whoever typed the date; all errors
/// are recoverable by retrying with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("The year cannot be less than 1.")]
    YearOutOfRange,

    #[error("The month must be between 1 and 12.")]
    MonthOutOfRange,

    #[error("The day is not valid for the given month and year.")]
    InvalidDay,

    #[error("The input contained an invalid month.")]
    InvalidMonthName(BString),

    #[error("The input does not appear to contain a date.")]
    NoDateFound(BString),

    #[error("The second date cannot come before the first.")]
    InvertedRange,

    #[error("The number is too large: {0}")]
    NumberTooLarge(BString),

    #[error("The date lies outside the Gregorian calendar regime.")]
    OutsideGregorianRegime,
}
