use super::engine::YEAR_LENGTH;
use super::sacred::SacredDate;
use crate::error::CalendarError;
use std::fmt;
use time::{Date, Duration};

/// A sacred date together with the number of whole cycles separating it from
/// the anchor.
///
/// Cycle 0 is the cycle beginning on the anchor; dates before the anchor fall
/// in negative cycles.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CycleDate {
    cycle: i64,
    date: SacredDate,
}

impl CycleDate {
    pub fn new(cycle: i64, date: SacredDate) -> CycleDate {
        CycleDate { cycle, date }
    }

    /// Places `target` relative to the cycles beginning on `anchor` and every
    /// [`YEAR_LENGTH`] days before and after it.
    pub fn locate(anchor: Date, target: Date) -> CycleDate {
        let diff_days = (target - anchor).whole_days();
        let year = i64::from(YEAR_LENGTH);
        let cycle = diff_days.div_euclid(year);
        let day_in_cycle = u16::try_from(diff_days.rem_euclid(year)).unwrap_or_default();
        CycleDate {
            cycle,
            date: SacredDate::from_cycle_day(day_in_cycle),
        }
    }

    /// Returns the Gregorian date on which Month 1, Day 1 of cycle `cycle`
    /// falls.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfTime`] if that date cannot be
    /// represented.
    pub fn cycle_anchor(anchor: Date, cycle: i64) -> Result<Date, CalendarError> {
        cycle
            .checked_mul(i64::from(YEAR_LENGTH))
            .and_then(|days| anchor.checked_add(Duration::days(days)))
            .ok_or(CalendarError::OutOfTime)
    }

    pub fn cycle(self) -> i64 {
        self.cycle
    }

    pub fn date(self) -> SacredDate {
        self.date
    }

    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfTime`] if the resulting date cannot be
    /// represented.
    pub fn to_gregorian(self, anchor: Date) -> Result<Date, CalendarError> {
        // The cycle's own first day may be unrepresentable even when the
        // result is not, so add everything to the anchor in one step
        self.cycle
            .checked_mul(i64::from(YEAR_LENGTH))
            .and_then(|days| days.checked_add(self.date.offset()))
            .and_then(|days| anchor.checked_add(Duration::days(days)))
            .ok_or(CalendarError::OutOfTime)
    }
}

impl fmt::Display for CycleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cycle {})", self.date, self.cycle)
    }
}
