//! Invariants of the Gregorian <-> sacred date mapping:
//! - conversions round-trip in both directions within a cycle
//! - consecutive Gregorian days map to consecutive sacred days
//! - the cycle boundaries are exactly 364 days apart
//! - Sabbaths sit at fixed positions

use proptest::prelude::*;
use tekufah::{
    gregorian_to_sacred, is_weekly_sabbath, month_length, sacred_to_gregorian, CycleDate,
    SacredDate, MONTHS_PER_YEAR, YEAR_LENGTH,
};
use time::macros::date;
use time::{Date, Duration};

fn any_date() -> impl Strategy<Value = Date> {
    let lo = date!(1600 - 01 - 01).to_julian_day();
    let hi = date!(2400 - 12 - 31).to_julian_day();
    (lo..=hi).prop_map(|jd| Date::from_julian_day(jd).unwrap())
}

fn any_representable_date() -> impl Strategy<Value = Date> {
    (Date::MIN.to_julian_day()..=Date::MAX.to_julian_day())
        .prop_map(|jd| Date::from_julian_day(jd).unwrap())
}

fn any_sacred_date() -> impl Strategy<Value = SacredDate> {
    (1..=MONTHS_PER_YEAR)
        .prop_flat_map(|month| (Just(month), 1..=month_length(month)))
        .prop_map(|(month, day)| SacredDate::new(month, day).unwrap())
}

fn in_cycle_offset() -> impl Strategy<Value = i64> {
    0..i64::from(YEAR_LENGTH)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn sacred_round_trip(anchor in any_date(), sd in any_sacred_date()) {
        let greg = sacred_to_gregorian(anchor, sd.month(), sd.day()).unwrap();
        prop_assert_eq!(gregorian_to_sacred(anchor, greg), Some(sd));
    }

    #[test]
    fn gregorian_round_trip(anchor in any_date(), offset in in_cycle_offset()) {
        let target = anchor + Duration::days(offset);
        let sd = gregorian_to_sacred(anchor, target).unwrap();
        prop_assert_eq!(sacred_to_gregorian(anchor, sd.month(), sd.day()), Ok(target));
        prop_assert_eq!(i64::from(sd.ordinal0()), offset);
    }

    #[test]
    fn next_day_is_next_position(anchor in any_date(), offset in 0..i64::from(YEAR_LENGTH) - 1) {
        let target = anchor + Duration::days(offset);
        let today = gregorian_to_sacred(anchor, target).unwrap();
        let tomorrow = gregorian_to_sacred(anchor, target.next_day().unwrap()).unwrap();
        prop_assert_eq!(today.next(), Some(tomorrow));
        prop_assert_eq!(tomorrow.previous(), Some(today));
        prop_assert!(today < tomorrow);
    }

    #[test]
    fn before_anchor_is_unplaced(anchor in any_date(), back in 1i64..2000) {
        prop_assert_eq!(gregorian_to_sacred(anchor, anchor - Duration::days(back)), None);
    }

    #[test]
    fn cycle_overflow_is_unplaced(anchor in any_date(), extra in 0i64..2000) {
        let target = anchor + Duration::days(i64::from(YEAR_LENGTH) + extra);
        prop_assert_eq!(gregorian_to_sacred(anchor, target), None);
    }

    #[test]
    fn locate_round_trip(anchor in any_representable_date(), target in any_representable_date()) {
        let cd = CycleDate::locate(anchor, target);
        prop_assert_eq!(cd.to_gregorian(anchor), Ok(target));
        if cd.cycle() == 0 {
            prop_assert_eq!(gregorian_to_sacred(anchor, target), Some(cd.date()));
        } else {
            prop_assert_eq!(gregorian_to_sacred(anchor, target), None);
        }
    }

    #[test]
    fn sabbath_positions(sd in any_sacred_date()) {
        prop_assert_eq!(sd.is_sabbath(), sd.day() % 7 == 0 && sd.day() <= 28);
        prop_assert_eq!(sd.is_sabbath(), is_weekly_sabbath(sd.day()));
        if sd.day() > 28 {
            prop_assert!(!sd.is_sabbath());
            prop_assert!(sd.is_transitional());
        }
    }
}

#[test]
fn anchor_maps_to_first_day() {
    let anchor = date!(2024 - 03 - 25);
    assert_eq!(gregorian_to_sacred(anchor, anchor), Some(SacredDate::FIRST));
    assert_eq!(
        gregorian_to_sacred(anchor, anchor.previous_day().unwrap()),
        None
    );
    assert_eq!(
        gregorian_to_sacred(anchor, anchor + Duration::days(364)),
        None
    );
}

#[test]
fn reference_scenarios() {
    let anchor = date!(2024 - 03 - 25);
    let at = |month, day| SacredDate::new(month, day).ok();
    assert_eq!(gregorian_to_sacred(anchor, date!(2024 - 03 - 25)), at(1, 1));
    assert_eq!(gregorian_to_sacred(anchor, date!(2024 - 04 - 23)), at(1, 30));
    assert_eq!(gregorian_to_sacred(anchor, date!(2024 - 04 - 24)), at(2, 1));
    assert_eq!(sacred_to_gregorian(anchor, 3, 31), Ok(date!(2024 - 06 - 23)));
    assert_eq!(sacred_to_gregorian(anchor, 4, 1), Ok(date!(2024 - 06 - 24)));
    assert_eq!(gregorian_to_sacred(anchor, date!(2023 - 01 - 01)), None);
}
