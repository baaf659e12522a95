mod cycle;
mod days;
mod engine;
mod sacred;
pub use self::cycle::CycleDate;
pub use self::days::{cycle_days, sabbaths, DayCell, SacredMonth, Week};
pub use self::engine::{
    gregorian_to_sacred, is_tekufah_month, month_length, sacred_to_gregorian, MONTHS_PER_YEAR,
    TEKUFAH_MONTHS, YEAR_LENGTH,
};
pub use self::sacred::{is_weekly_sabbath, SacredDate, DAYS_PER_WEEK, WEEKS_PER_MONTH};
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO `YYYY-MM-DD` calendar date.
///
/// This is the only textual form in which dates enter the crate; there is no
/// time-of-day or offset to get wrong.
///
/// # Errors
///
/// Returns the `time` crate's parse error if `s` is not a valid date.
pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, &YMD_FMT)
}
