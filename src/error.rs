use thiserror::Error;

/// Error type for the fallible calendar operations.
///
/// `InvalidMonth` and `InvalidDay` are only produced by the validating
/// constructors; the permissive [`sacred_to_gregorian()`][crate::sacred_to_gregorian]
/// never checks its inputs.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum CalendarError {
    /// A month number outside 1..=12
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u8 },

    /// A day number that does not exist in the given month
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay { day: u8, month: u8, max_day: u8 },

    /// The Gregorian side of a conversion fell outside the range of dates
    /// that `time::Date` can represent
    #[error("reached the end of time")]
    OutOfTime,
}
