//! Business rule validation for booking operations.

use chrono::NaiveDate;

use super::error::BookingError;

/// Validates the stay dates of a booking request.
///
/// A stay is rejected when check-out is before check-in, when check-in lies
/// before `today`, or when check-in equals check-out (zero-night stays are
/// forbidden).
///
/// # Errors
///
/// Returns `BookingError::InvalidDates` if any of the three rules is
/// violated.
pub fn validate_stay(
    check_in: NaiveDate,
    check_out: NaiveDate,
    today: NaiveDate,
) -> Result<(), BookingError> {
    if check_out < check_in || check_in < today || check_in == check_out {
        return Err(BookingError::InvalidDates {
            check_in,
            check_out,
        });
    }

    Ok(())
}

/// Counts the billed nights between check-in and check-out.
///
/// One night per whole day between the dates. Callers must have validated
/// the stay first; for a valid stay the count is at least 1.
#[must_use]
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Tests whether two half-open date ranges [start1, end1) and
/// [start2, end2) overlap.
///
/// Back-to-back ranges (one ending on the day the other starts) do not
/// overlap.
#[must_use]
pub fn ranges_overlap(
    start1: NaiveDate,
    end1: NaiveDate,
    start2: NaiveDate,
    end2: NaiveDate,
) -> bool {
    start1 < end2 && start2 < end1
}
