//! Property tests over the temporal value model: canonical-text round
//! trips, calendar arithmetic laws, and instant normalization.

use proptest::prelude::*;

use tempora_core::{Date, DateTime, Duration, Instant, Time, Weekday};

/// A strategy over arbitrary valid dates: pick year and month freely, then
/// a day within that month's actual length.
fn arb_date() -> impl Strategy<Value = Date> {
    (-9999i32..=9999, 1u8..=12).prop_flat_map(|(year, month)| {
        let len = Date::of(year, month, 1).unwrap().length_of_month();
        (1u8..=len).prop_map(move |day| Date::of(year, month, day).unwrap())
    })
}

fn arb_time() -> impl Strategy<Value = Time> {
    (0u8..=23, 0u8..=59, 0u8..=59).prop_map(|(h, m, s)| Time::of_hms(h, m, s).unwrap())
}

proptest! {
    #[test]
    fn date_text_round_trips(date in arb_date()) {
        let text = date.to_string();
        prop_assert_eq!(Date::parse(&text).unwrap(), date);
    }

    #[test]
    fn time_text_round_trips(time in arb_time()) {
        prop_assert_eq!(Time::parse(&time.to_string()).unwrap(), time);
    }

    #[test]
    fn datetime_text_round_trips(date in arb_date(), time in arb_time()) {
        let dt = DateTime::from_parts(date, time);
        prop_assert_eq!(DateTime::parse(&dt.to_string()).unwrap(), dt);
    }

    #[test]
    fn leap_year_matches_gregorian_formula(year in -9999i32..=9999) {
        let date = Date::of(year, 1, 1).unwrap();
        let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        prop_assert_eq!(date.is_leap_year(), expected);
    }

    #[test]
    fn day_of_year_is_consistent_with_month_lengths(date in arb_date()) {
        // Summing the lengths of the preceding months reproduces the ordinal.
        let mut expected = date.day() as u16;
        for month in 1..date.month() {
            expected += Date::of(date.year(), month, 1).unwrap().length_of_month() as u16;
        }
        prop_assert_eq!(date.day_of_year(), expected);
    }

    #[test]
    fn next_or_same_lands_on_target_within_a_week(date in arb_date()) {
        let target = date.with(tempora_core::Adjuster::next_or_same(Weekday::Sunday));
        let ahead = date.days_until(target);
        prop_assert!((0..=6).contains(&ahead));
        prop_assert_eq!(target.day_of_week(), Weekday::Sunday);
    }

    #[test]
    fn with_day_of_month_round_trips_when_valid(date in arb_date(), day in 1u8..=31) {
        match date.with_day_of_month(day) {
            Ok(modified) => {
                prop_assert_eq!(modified.day(), day);
                prop_assert_eq!(modified.year(), date.year());
                prop_assert_eq!(modified.month(), date.month());
            }
            Err(_) => prop_assert!(day > date.length_of_month()),
        }
    }

    #[test]
    fn instant_milli_and_second_constructions_agree(ms in -4_000_000_000i64..=4_000_000_000) {
        let from_milli = Instant::of_epoch_milli(ms);
        let seconds = ms.div_euclid(1000);
        let nanos = ms.rem_euclid(1000) * 1_000_000;
        let from_second = Instant::of_epoch_second(seconds, nanos).unwrap();
        prop_assert_eq!(from_milli, from_second);
    }

    #[test]
    fn instant_nano_remainder_is_always_in_range(
        seconds in -1_000_000i64..=1_000_000,
        adjustment in -10_000_000_000i64..=10_000_000_000,
    ) {
        let instant = Instant::of_epoch_second(seconds, adjustment).unwrap();
        prop_assert!(instant.nano() < 1_000_000_000);
    }

    #[test]
    fn duration_between_times_is_antisymmetric(a in arb_time(), b in arb_time()) {
        let forward = Duration::between(a, b).unwrap();
        let backward = Duration::between(b, a).unwrap();
        prop_assert_eq!(forward.total_nanos(), -backward.total_nanos());
    }

    #[test]
    fn duration_between_datetimes_matches_day_count(date_a in arb_date(), date_b in arb_date()) {
        let midnight = Time::of(0, 0).unwrap();
        let span = Duration::between(
            DateTime::from_parts(date_a, midnight),
            DateTime::from_parts(date_b, midnight),
        )
        .unwrap();
        prop_assert_eq!(span.seconds(), date_a.days_until(date_b) * 86_400);
        prop_assert_eq!(span.subsec_nanos(), 0);
    }

    #[test]
    fn serde_round_trips_through_canonical_text(date in arb_date(), time in arb_time()) {
        let dt = DateTime::from_parts(date, time);
        let json = serde_json::to_string(&dt).unwrap();
        prop_assert_eq!(serde_json::from_str::<DateTime>(&json).unwrap(), dt);
    }
}
