//! Property-based tests for the booking ledger.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use mockable::Clock;
use proptest::prelude::*;
use stayledger_shared::{Money, RoomNumber, UserId};

use super::error::BookingError;
use super::service::BookingLedger;
use super::types::{BookingRequest, RoomCategory};

struct FixtureClock {
    today: NaiveDate,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.today.and_hms_opt(0, 0, 0).unwrap().and_utc()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn make_ledger() -> BookingLedger {
    BookingLedger::with_clock(Arc::new(FixtureClock { today: today() }))
}

fn category_strategy() -> impl Strategy<Value = RoomCategory> {
    prop_oneof![
        Just(RoomCategory::Standard),
        Just(RoomCategory::Junior),
        Just(RoomCategory::Suite),
    ]
}

proptest! {
    /// A booking succeeds exactly when the balance covers
    /// nights x price, and on success the balance drops by exactly that
    /// cost; on failure nothing changes.
    #[test]
    fn prop_cost_accounting(
        price in 0i64..5_000,
        balance in 0i64..100_000,
        nights in 1i64..30,
        start in 0i64..300,
    ) {
        let mut ledger = make_ledger();
        ledger.register_room(RoomNumber::new(1), RoomCategory::Standard, Money::new(price));
        ledger.register_user(UserId::new(1), Money::new(balance));

        let check_in = today() + Duration::days(start);
        let request = BookingRequest {
            user_id: UserId::new(1),
            room_number: RoomNumber::new(1),
            check_in,
            check_out: check_in + Duration::days(nights),
        };

        let cost = price * nights;
        let result = ledger.book(&request);
        let user_balance = ledger.users().next().unwrap().balance;

        if balance >= cost {
            let booking = result.unwrap();
            prop_assert_eq!(booking.nights, nights);
            prop_assert_eq!(booking.total_cost, Money::new(cost));
            prop_assert_eq!(user_balance, Money::new(balance - cost));
            prop_assert_eq!(ledger.bookings().count(), 1);
        } else {
            prop_assert_eq!(
                result,
                Err(BookingError::InsufficientFunds {
                    balance: Money::new(balance),
                    cost: Money::new(cost),
                })
            );
            prop_assert_eq!(user_balance, Money::new(balance));
            prop_assert_eq!(ledger.bookings().count(), 0);
        }
    }

    /// Re-registering an existing room never changes the first
    /// registration, whatever attributes the second attempt carries.
    #[test]
    fn prop_room_registration_idempotent(
        first_category in category_strategy(),
        first_price in 0i64..10_000,
        second_category in category_strategy(),
        second_price in 0i64..10_000,
    ) {
        let mut ledger = make_ledger();
        ledger.register_room(RoomNumber::new(7), first_category, Money::new(first_price));
        ledger.register_room(RoomNumber::new(7), second_category, Money::new(second_price));

        prop_assert_eq!(ledger.rooms().count(), 1);
        let room = ledger.rooms().next().unwrap();
        prop_assert_eq!(room.category, first_category);
        prop_assert_eq!(room.price_per_night, Money::new(first_price));
    }

    /// Re-registering an existing user never changes the first balance.
    #[test]
    fn prop_user_registration_idempotent(
        first_balance in 0i64..100_000,
        second_balance in 0i64..100_000,
    ) {
        let mut ledger = make_ledger();
        ledger.register_user(UserId::new(7), Money::new(first_balance));
        ledger.register_user(UserId::new(7), Money::new(second_balance));

        prop_assert_eq!(ledger.users().count(), 1);
        prop_assert_eq!(ledger.users().next().unwrap().balance, Money::new(first_balance));
    }

    /// Two stays in the same room that meet exactly at a boundary date are
    /// both accepted.
    #[test]
    fn prop_back_to_back_stays_both_accepted(
        start in 0i64..300,
        len1 in 1i64..15,
        len2 in 1i64..15,
    ) {
        let mut ledger = make_ledger();
        ledger.register_room(RoomNumber::new(1), RoomCategory::Standard, Money::new(10));
        ledger.register_user(UserId::new(1), Money::new(1_000_000));
        ledger.register_user(UserId::new(2), Money::new(1_000_000));

        let first_in = today() + Duration::days(start);
        let boundary = first_in + Duration::days(len1);

        let first = ledger.book(&BookingRequest {
            user_id: UserId::new(1),
            room_number: RoomNumber::new(1),
            check_in: first_in,
            check_out: boundary,
        });
        prop_assert!(first.is_ok());

        let second = ledger.book(&BookingRequest {
            user_id: UserId::new(2),
            room_number: RoomNumber::new(1),
            check_in: boundary,
            check_out: boundary + Duration::days(len2),
        });
        prop_assert!(second.is_ok());
    }
}
