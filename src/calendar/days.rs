use super::engine::{month_length, MONTHS_PER_YEAR};
use super::sacred::{SacredDate, DAYS_PER_WEEK, WEEKS_PER_MONTH};
use crate::error::CalendarError;
use std::iter::successors;
use time::Date;

const DAYS_IN_WEEK: usize = DAYS_PER_WEEK as usize;

/// A sacred position paired with the Gregorian date it falls on
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DayCell {
    pub sacred: SacredDate,
    pub gregorian: Date,
}

impl DayCell {
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfTime`] if `sacred` cannot be placed in
    /// the cycle beginning on `anchor`.
    pub fn new(anchor: Date, sacred: SacredDate) -> Result<DayCell, CalendarError> {
        let gregorian = sacred.to_gregorian(anchor)?;
        Ok(DayCell { sacred, gregorian })
    }

    /// Advances both sides by one day.  Returns `None` at the end of the
    /// cycle or the end of time.
    pub fn next(self) -> Option<DayCell> {
        Some(DayCell {
            sacred: self.sacred.next()?,
            gregorian: self.gregorian.next_day()?,
        })
    }

    pub fn is_sabbath(&self) -> bool {
        self.sacred.is_sabbath()
    }

    pub fn is_transitional(&self) -> bool {
        self.sacred.is_transitional()
    }
}

/// Iterates over all days of the cycle beginning on `anchor`, in order
pub fn cycle_days(anchor: Date) -> impl Iterator<Item = DayCell> {
    successors(
        Some(DayCell {
            sacred: SacredDate::FIRST,
            gregorian: anchor,
        }),
        |cell| cell.next(),
    )
}

/// Iterates over the weekly Sabbaths of the cycle beginning on `anchor`
pub fn sabbaths(anchor: Date) -> impl Iterator<Item = DayCell> {
    cycle_days(anchor).filter(DayCell::is_sabbath)
}

/// One of the four seven-day weeks at the start of a sacred month
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Week([DayCell; DAYS_IN_WEEK]);

impl Week {
    pub fn days(&self) -> &[DayCell; DAYS_IN_WEEK] {
        &self.0
    }

    pub fn first(&self) -> DayCell {
        self.0[0]
    }

    pub fn sabbath(&self) -> DayCell {
        self.0[DAYS_IN_WEEK - 1]
    }
}

/// A single month of the cycle beginning on a given anchor
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SacredMonth {
    anchor: Date,
    month: u8,
}

impl SacredMonth {
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn new(anchor: Date, month: u8) -> Result<SacredMonth, CalendarError> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(SacredMonth { anchor, month })
    }

    pub fn anchor(&self) -> Date {
        self.anchor
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Number of days in the month: 31 for a Tekufah month, otherwise 30
    pub fn day_count(&self) -> u8 {
        month_length(self.month)
    }

    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfTime`] if the month's first day cannot
    /// be represented.
    pub fn first_day(&self) -> Result<DayCell, CalendarError> {
        let first = SacredDate::new(self.month, 1)?;
        DayCell::new(self.anchor, first)
    }

    /// Iterates over every day of the month.  The iterator ends early if the
    /// Gregorian side reaches the end of time.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfTime`] if the month's first day cannot
    /// be represented.
    pub fn days(&self) -> Result<impl Iterator<Item = DayCell>, CalendarError> {
        let month = self.month;
        let first = self.first_day()?;
        Ok(successors(Some(first), |cell| cell.next())
            .take_while(move |cell| cell.sacred.month() == month))
    }

    /// Returns the four seven-day weeks making up days 1 through 28
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfTime`] if any of those days cannot be
    /// represented.
    pub fn weeks(&self) -> Result<Vec<Week>, CalendarError> {
        let week_qty = usize::from(WEEKS_PER_MONTH);
        let cells = self
            .days()?
            .take(week_qty * DAYS_IN_WEEK)
            .collect::<Vec<_>>();
        let weeks = cells
            .chunks_exact(DAYS_IN_WEEK)
            .filter_map(|chunk| <[DayCell; DAYS_IN_WEEK]>::try_from(chunk).ok())
            .map(Week)
            .collect::<Vec<_>>();
        if weeks.len() == week_qty {
            Ok(weeks)
        } else {
            Err(CalendarError::OutOfTime)
        }
    }

    /// Iterates over the days after the fourth week: 29, 30, and (in Tekufah
    /// months) 31
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfTime`] if the month's first day cannot
    /// be represented.
    pub fn transitional_days(&self) -> Result<impl Iterator<Item = DayCell>, CalendarError> {
        Ok(self.days()?.filter(DayCell::is_transitional))
    }
}
