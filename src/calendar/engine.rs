use super::sacred::SacredDate;
use crate::error::CalendarError;
use time::{Date, Duration};

/// Number of days in every sacred year
pub const YEAR_LENGTH: u16 = 364;

pub const MONTHS_PER_YEAR: u8 = 12;

/// Months whose last day is a Tekufah (seasonal turning) day
pub const TEKUFAH_MONTHS: [u8; 4] = [3, 6, 9, 12];

const SHORT_MONTH_LEN: u8 = 30;
pub(super) const TEKUFAH_MONTH_LEN: u8 = 31;

pub fn is_tekufah_month(month: u8) -> bool {
    TEKUFAH_MONTHS.contains(&month)
}

/// Returns the length of `month`: 31 days for the Tekufah months, 30 for
/// everything else.
///
/// Month numbers past 12 are not rejected; they are simply "not Tekufah" and
/// so get 30 days, matching how [`sacred_to_gregorian()`] treats them.
pub fn month_length(month: u8) -> u8 {
    if is_tekufah_month(month) {
        TEKUFAH_MONTH_LEN
    } else {
        SHORT_MONTH_LEN
    }
}

/// Zero-based offset of `(month, day)` from Month 1, Day 1, without any range
/// checks.  A day of 0 yields an offset one less than the month's first day.
pub(super) fn raw_offset(month: u8, day: u8) -> i64 {
    let before: i64 = (1..month).map(|m| i64::from(month_length(m))).sum();
    before + i64::from(day) - 1
}

/// Returns the Gregorian date on which sacred `(month, day)` falls in the
/// cycle beginning on `anchor`.
///
/// Neither `month` nor `day` is validated: day 31 of a 30-day month is
/// treated as the day after day 30, and so on.  Use
/// [`SacredDate::new()`] followed by [`SacredDate::to_gregorian()`] for a
/// checked conversion.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfTime`] if the resulting date cannot be
/// represented.
pub fn sacred_to_gregorian(anchor: Date, month: u8, day: u8) -> Result<Date, CalendarError> {
    anchor
        .checked_add(Duration::days(raw_offset(month, day)))
        .ok_or(CalendarError::OutOfTime)
}

/// Returns the sacred position of `target` within the single cycle that
/// begins on `anchor`.
///
/// Returns `None` if `target` precedes `anchor` or lies [`YEAR_LENGTH`] or
/// more days after it; this function never wraps into a following cycle.  See
/// [`CycleDate::locate()`][super::CycleDate::locate] for a version that does.
pub fn gregorian_to_sacred(anchor: Date, target: Date) -> Option<SacredDate> {
    let diff_days = (target - anchor).whole_days();
    if diff_days < 0 {
        return None;
    }
    SacredDate::from_ordinal0(diff_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const ANCHOR: Date = date!(2024 - 03 - 25);

    #[test]
    fn test_year_length() {
        let total: u16 = (1..=MONTHS_PER_YEAR)
            .map(|m| u16::from(month_length(m)))
            .sum();
        assert_eq!(total, YEAR_LENGTH);
    }

    #[test]
    fn test_month_lengths() {
        let lengths = (1..=MONTHS_PER_YEAR)
            .map(month_length)
            .collect::<Vec<_>>();
        assert_eq!(
            lengths,
            [30, 30, 31, 30, 30, 31, 30, 30, 31, 30, 30, 31]
        );
        assert_eq!(month_length(0), 30);
        assert_eq!(month_length(15), 30);
    }

    #[test]
    fn test_to_sacred_at_anchor() {
        assert_eq!(
            gregorian_to_sacred(ANCHOR, ANCHOR),
            Some(SacredDate::FIRST)
        );
    }

    #[test]
    fn test_to_sacred_end_of_first_month() {
        let sd = gregorian_to_sacred(ANCHOR, date!(2024 - 04 - 23)).unwrap();
        assert_eq!((sd.month(), sd.day()), (1, 30));
    }

    #[test]
    fn test_to_sacred_start_of_second_month() {
        let sd = gregorian_to_sacred(ANCHOR, date!(2024 - 04 - 24)).unwrap();
        assert_eq!((sd.month(), sd.day()), (2, 1));
    }

    #[test]
    fn test_to_sacred_before_anchor() {
        assert_eq!(gregorian_to_sacred(ANCHOR, date!(2023 - 01 - 01)), None);
        assert_eq!(gregorian_to_sacred(ANCHOR, date!(2024 - 03 - 24)), None);
    }

    #[test]
    fn test_to_sacred_last_day_of_cycle() {
        let sd = gregorian_to_sacred(ANCHOR, date!(2025 - 03 - 23)).unwrap();
        assert_eq!(sd, SacredDate::LAST);
    }

    #[test]
    fn test_to_sacred_cycle_overflow() {
        assert_eq!(gregorian_to_sacred(ANCHOR, date!(2025 - 03 - 24)), None);
        assert_eq!(gregorian_to_sacred(ANCHOR, date!(2030 - 01 - 01)), None);
    }

    #[test]
    fn test_to_gregorian_tekufah_day() {
        assert_eq!(
            sacred_to_gregorian(ANCHOR, 3, 31),
            Ok(date!(2024 - 06 - 23))
        );
    }

    #[test]
    fn test_to_gregorian_after_tekufah_day() {
        assert_eq!(sacred_to_gregorian(ANCHOR, 4, 1), Ok(date!(2024 - 06 - 24)));
    }

    #[test]
    fn test_to_gregorian_first_and_last() {
        assert_eq!(sacred_to_gregorian(ANCHOR, 1, 1), Ok(ANCHOR));
        assert_eq!(
            sacred_to_gregorian(ANCHOR, 12, 31),
            Ok(date!(2025 - 03 - 23))
        );
    }

    #[test]
    fn test_to_gregorian_unchecked_day() {
        // Day 31 of a 30-day month spills into the next month
        assert_eq!(
            sacred_to_gregorian(ANCHOR, 1, 31),
            sacred_to_gregorian(ANCHOR, 2, 1)
        );
        assert_eq!(sacred_to_gregorian(ANCHOR, 1, 0), Ok(date!(2024 - 03 - 24)));
    }

    #[test]
    fn test_to_gregorian_out_of_time() {
        assert_eq!(
            sacred_to_gregorian(Date::MAX, 1, 2),
            Err(CalendarError::OutOfTime)
        );
        assert_eq!(
            sacred_to_gregorian(Date::MIN, 1, 0),
            Err(CalendarError::OutOfTime)
        );
    }

    #[test]
    fn test_leap_day_inside_cycle() {
        // 2024-02-29 exists, so a cycle anchored before it gains no extra day
        let anchor = date!(2024 - 01 - 01);
        assert_eq!(sacred_to_gregorian(anchor, 2, 30), Ok(date!(2024 - 02 - 29)));
        assert_eq!(sacred_to_gregorian(anchor, 3, 1), Ok(date!(2024 - 03 - 01)));
    }
}
