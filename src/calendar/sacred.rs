use super::engine::{
    month_length, raw_offset, sacred_to_gregorian, MONTHS_PER_YEAR, TEKUFAH_MONTH_LEN,
    YEAR_LENGTH,
};
use crate::error::CalendarError;
use std::fmt;
use time::Date;

pub const DAYS_PER_WEEK: u8 = 7;

/// Number of whole weeks at the start of every month.  Days after these are
/// transitional and belong to no week.
pub const WEEKS_PER_MONTH: u8 = 4;

const LAST_WEEKLY_DAY: u8 = DAYS_PER_WEEK * WEEKS_PER_MONTH;

/// Returns `true` if day-of-month `day` is a weekly Sabbath.
///
/// Only the seventh day of each of the first four weeks qualifies; days 29,
/// 30 and 31 are outside the weekly cycle.
pub fn is_weekly_sabbath(day: u8) -> bool {
    (1..=LAST_WEEKLY_DAY).contains(&day) && day % DAYS_PER_WEEK == 0
}

/// A position in the 364-day calendar.
///
/// There is no year: which cycle a `SacredDate` belongs to is determined by
/// the anchor it is paired with.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct SacredDate {
    // Field order gives the derived `Ord` chronological order
    month: u8,
    day: u8,
}

impl SacredDate {
    pub const FIRST: SacredDate = SacredDate { month: 1, day: 1 };

    pub const LAST: SacredDate = SacredDate {
        month: MONTHS_PER_YEAR,
        day: TEKUFAH_MONTH_LEN,
    };

    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` does not occur in that month.
    pub fn new(month: u8, day: u8) -> Result<SacredDate, CalendarError> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = month_length(month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(SacredDate { month, day })
    }

    /// Converts a zero-based day-of-cycle into a `SacredDate`.
    ///
    /// Returns `None` if `ordinal` is negative or not less than
    /// [`YEAR_LENGTH`].
    pub fn from_ordinal0(ordinal: i64) -> Option<SacredDate> {
        let ordinal = u16::try_from(ordinal)
            .ok()
            .filter(|&ordinal| ordinal < YEAR_LENGTH)?;
        Some(SacredDate::from_cycle_day(ordinal))
    }

    /// Like [`SacredDate::from_ordinal0`], but wraps `ordinal` into the cycle
    /// instead of rejecting it.
    pub(super) fn from_cycle_day(ordinal: u16) -> SacredDate {
        let mut remaining = ordinal % YEAR_LENGTH;
        let mut month = 1;
        while month < MONTHS_PER_YEAR {
            let len = u16::from(month_length(month));
            if remaining < len {
                break;
            }
            remaining -= len;
            month += 1;
        }
        // Month 12 always has room for what is left
        let day = u8::try_from(remaining + 1).unwrap_or(TEKUFAH_MONTH_LEN);
        SacredDate { month, day }
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }

    /// Zero-based day of the cycle, in `0..YEAR_LENGTH`
    pub fn ordinal0(self) -> u16 {
        let before: u16 = (1..self.month).map(|m| u16::from(month_length(m))).sum();
        before + u16::from(self.day) - 1
    }

    pub fn is_sabbath(self) -> bool {
        is_weekly_sabbath(self.day)
    }

    /// Zero-based position of the day within its week, `(day - 1) % 7`.
    ///
    /// This is still computed for transitional days, but is meaningless for
    /// them.
    pub fn weekday_index(self) -> u8 {
        (self.day - 1) % DAYS_PER_WEEK
    }

    /// Returns `true` for days 29 and later, which fall outside the weekly
    /// cycle
    pub fn is_transitional(self) -> bool {
        self.day > LAST_WEEKLY_DAY
    }

    /// Returns `true` for day 31, the Tekufah day at the end of months 3, 6,
    /// 9 and 12
    pub fn is_tekufah_day(self) -> bool {
        self.day == TEKUFAH_MONTH_LEN
    }

    pub fn is_last_day_of_month(self) -> bool {
        self.day == month_length(self.month)
    }

    /// Returns the following day, or `None` if `self` is the last day of the
    /// cycle
    pub fn next(self) -> Option<SacredDate> {
        if self.is_last_day_of_month() {
            (self.month < MONTHS_PER_YEAR).then(|| SacredDate {
                month: self.month + 1,
                day: 1,
            })
        } else {
            Some(SacredDate {
                month: self.month,
                day: self.day + 1,
            })
        }
    }

    /// Returns the preceding day, or `None` if `self` is the first day of the
    /// cycle
    pub fn previous(self) -> Option<SacredDate> {
        if self.day > 1 {
            Some(SacredDate {
                month: self.month,
                day: self.day - 1,
            })
        } else if self.month > 1 {
            let month = self.month - 1;
            Some(SacredDate {
                month,
                day: month_length(month),
            })
        } else {
            None
        }
    }

    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfTime`] if the resulting date cannot be
    /// represented.
    pub fn to_gregorian(self, anchor: Date) -> Result<Date, CalendarError> {
        sacred_to_gregorian(anchor, self.month, self.day)
    }

    pub(super) fn offset(self) -> i64 {
        raw_offset(self.month, self.day)
    }
}

impl fmt::Display for SacredDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Month {}, Day {}", self.month, self.day)
    }
}
