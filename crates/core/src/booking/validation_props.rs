//! Property-based tests for stay validation and interval overlap.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use super::validation::{nights_between, ranges_overlap, validate_stay};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

/// Strategy for dates within a year of the base date.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..365).prop_map(|days| base() + Duration::days(days))
}

/// Strategy for a non-empty half-open range [start, end).
fn any_range() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    ((0i64..365), (1i64..60))
        .prop_map(|(start, len)| (base() + Duration::days(start), base() + Duration::days(start + len)))
}

proptest! {
    /// Overlap is symmetric in its two ranges.
    #[test]
    fn prop_overlap_symmetric(
        a in any_date(),
        b in any_date(),
        c in any_date(),
        d in any_date(),
    ) {
        prop_assert_eq!(ranges_overlap(a, b, c, d), ranges_overlap(c, d, a, b));
    }

    /// Two non-empty half-open ranges overlap exactly when they share a day.
    #[test]
    fn prop_overlap_matches_shared_day(
        r1 in any_range(),
        r2 in any_range(),
    ) {
        let (s1, e1) = r1;
        let (s2, e2) = r2;
        let shares_day = s1.max(s2) < e1.min(e2);
        prop_assert_eq!(ranges_overlap(s1, e1, s2, e2), shares_day);
    }

    /// A range never overlaps the range starting exactly where it ends.
    #[test]
    fn prop_back_to_back_never_overlaps(
        start in 0i64..300,
        len1 in 1i64..30,
        len2 in 1i64..30,
    ) {
        let s1 = base() + Duration::days(start);
        let e1 = s1 + Duration::days(len1);
        let e2 = e1 + Duration::days(len2);
        prop_assert!(!ranges_overlap(s1, e1, e1, e2));
        prop_assert!(!ranges_overlap(e1, e2, s1, e1));
    }

    /// A stay is valid exactly when today <= check-in < check-out.
    #[test]
    fn prop_stay_validity(
        check_in in any_date(),
        check_out in any_date(),
        today_offset in 0i64..365,
    ) {
        let today = base() + Duration::days(today_offset);
        let result = validate_stay(check_in, check_out, today);
        let expected_ok = today <= check_in && check_in < check_out;
        prop_assert_eq!(result.is_ok(), expected_ok);
    }

    /// Night counting agrees with calendar-day subtraction.
    #[test]
    fn prop_nights_match_day_count(r in any_range()) {
        let (check_in, check_out) = r;
        let nights = nights_between(check_in, check_out);
        prop_assert!(nights >= 1);
        prop_assert_eq!(check_in + Duration::days(nights), check_out);
    }
}
