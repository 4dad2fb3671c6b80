//! Construction, narrowing, combination, and rendering behavior of
//! `TimeQuery` through the public API.

use jiff::Zoned;
use timesieve::{months, weekday, weekdays, QueryError, TimeQuery};

fn zoned(s: &str) -> Zoned {
    s.parse().expect("valid zoned datetime")
}

#[test]
fn selector_narrowing_shows_in_rendering() {
    let q = months("1-3,5-7,9-11").unwrap();
    assert_eq!(q.to_string(), "* * * 1,2,3,5,6,7,9,10,11 *");

    let q = timesieve::days("1-8").unwrap();
    assert_eq!(q.to_string(), "* * 1,2,3,4,5,6,7,8 *");
}

#[test]
fn full_weekday_range_is_still_open() {
    // 0-7 covers all seven days, so nothing was narrowed
    let q = weekdays("0-7").unwrap();
    assert_eq!(q.to_string(), "* * * * *");
}

#[test]
fn star_selector_never_restricts() {
    type Build = fn(&str) -> Result<TimeQuery, QueryError>;
    let builders: [Build; 5] = [
        timesieve::minutes,
        timesieve::hours,
        timesieve::days,
        months,
        weekdays,
    ];
    for build in builders {
        let q = build("*").unwrap();
        assert_eq!(q, TimeQuery::new());
    }
}

#[test]
fn disjoint_months_combine_to_nothing() {
    let q1 = months("1-3").unwrap();
    let q2 = months("4-6").unwrap();
    assert_eq!(q1.and(&q2).unwrap_err(), QueryError::Empty);
}

#[test]
fn overlapping_months_combine() {
    let q1 = months("1-3").unwrap();
    let q2 = months("2,4-12").unwrap();
    let q = q1.and(&q2).unwrap();
    assert_eq!(q.to_string(), "* * * 2 *");
}

#[test]
fn combining_different_fields_keeps_both() {
    let q1 = months("1-3").unwrap();
    let q2 = timesieve::days("4-6").unwrap();
    let q = q1.and(&q2).unwrap();
    assert_eq!(q.to_string(), "* * 4,5,6 1,2,3 *");
}

#[test]
fn parse_then_narrow_round_trips() {
    let q = TimeQuery::parse("* * * 1 *").unwrap();
    let q = q.hour([3]).unwrap();
    let q = q.minute([0, 30]).unwrap();
    assert_eq!(q.to_string(), "0,30 3 * 1 *");

    let reparsed = TimeQuery::parse(&q.to_string()).unwrap();
    assert_eq!(reparsed, q);
}

#[test]
fn out_of_range_token_is_rejected() {
    let err = TimeQuery::parse("30,60 * * 1 *").unwrap_err();
    assert!(matches!(err, QueryError::Range { .. }));
}

#[test]
fn wrong_token_count_is_rejected() {
    for bad in ["* * * *", "* * * * * *", "", "0 9"] {
        assert!(matches!(
            TimeQuery::parse(bad),
            Err(QueryError::Parse { .. })
        ));
    }
}

#[test]
fn from_str_parses_like_parse() {
    let q: TimeQuery = "*/15 9-17 * * 1-5".parse().unwrap();
    assert_eq!(q, TimeQuery::parse("*/15 9-17 * * 1-5").unwrap());
}

#[test]
fn sunday_matches_under_either_alias() {
    // 2006-01-01 was a Sunday
    let sunday = zoned("2006-01-01T10:30:00[UTC]");
    let by_zero = weekday([0]).unwrap();
    let by_seven = weekday([7]).unwrap();
    assert!(by_zero.matches(&sunday));
    assert!(by_seven.matches(&sunday));
    assert_eq!(by_zero, by_seven);

    let monday = zoned("2006-01-02T10:30:00[UTC]");
    assert!(!by_zero.matches(&monday));
    assert!(!by_seven.matches(&monday));
}

#[test]
fn every_valid_value_matches_its_own_timestamp() {
    // one representative per field
    let t = zoned("2026-07-15T09:45:00[UTC]"); // a Wednesday
    assert!(timesieve::minute([45]).unwrap().matches(&t));
    assert!(timesieve::hour([9]).unwrap().matches(&t));
    assert!(timesieve::day([15]).unwrap().matches(&t));
    assert!(timesieve::month([7]).unwrap().matches(&t));
    assert!(weekday([3]).unwrap().matches(&t));
}

#[test]
fn value_one_past_the_range_fails() {
    assert!(matches!(
        timesieve::minute([60]),
        Err(QueryError::Range { .. })
    ));
    assert!(matches!(timesieve::hour([24]), Err(QueryError::Range { .. })));
    assert!(matches!(timesieve::day([0]), Err(QueryError::Range { .. })));
    assert!(matches!(
        timesieve::month([13]),
        Err(QueryError::Range { .. })
    ));
    assert!(matches!(weekday([8]), Err(QueryError::Range { .. })));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_through_the_string_form() {
    let q: TimeQuery = "0,30 3 * 1 *".parse().unwrap();
    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, "\"0,30 3 * 1 *\"");

    let back: TimeQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);

    let err = serde_json::from_str::<TimeQuery>("\"not a query\"");
    assert!(err.is_err());
}
