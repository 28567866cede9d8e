//! The booking ledger.
//!
//! Holds the canonical room, user, and booking collections and performs the
//! validate-then-commit booking procedure. All validation happens before the
//! single mutation point, so a failed request leaves no partial state.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use stayledger_shared::{Money, RoomNumber, UserId};

use super::error::BookingError;
use super::types::{Booking, BookingRequest, Room, RoomCategory, User};
use super::validation::{nights_between, ranges_overlap, validate_stay};

/// In-memory ledger of rooms, users, and bookings.
///
/// Rooms and users are registered idempotently by id and live for the
/// ledger's lifetime; bookings are appended by [`BookingLedger::book`] and
/// never mutated afterward. The "check-in must not be in the past" rule
/// reads the injected clock, so tests and the demo can pin today's date.
pub struct BookingLedger {
    clock: Arc<dyn Clock>,
    rooms: Vec<Room>,
    users: Vec<User>,
    bookings: Vec<Booking>,
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingLedger {
    /// Creates an empty ledger bound to the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty ledger with an injected current-time source.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            rooms: Vec::new(),
            users: Vec::new(),
            bookings: Vec::new(),
        }
    }

    /// Registers a room.
    ///
    /// If a room with `number` already exists this is a no-op: the existing
    /// room keeps its category and price.
    pub fn register_room(
        &mut self,
        number: RoomNumber,
        category: RoomCategory,
        price_per_night: Money,
    ) {
        if self.find_room(number).is_some() {
            return;
        }

        self.rooms.push(Room {
            number,
            category,
            price_per_night,
        });
    }

    /// Registers a user.
    ///
    /// If a user with `id` already exists this is a no-op: the existing user
    /// keeps their balance.
    pub fn register_user(&mut self, id: UserId, balance: Money) {
        if self.find_user(id).is_some() {
            return;
        }

        self.users.push(User { id, balance });
    }

    /// Attempts to book a room for a user.
    ///
    /// Validation runs strictly in this order, short-circuiting on the
    /// first failure:
    ///
    /// 1. The user must exist
    /// 2. The room must exist
    /// 3. The stay dates must be valid (ordered, not in the past, at least
    ///    one night)
    /// 4. nights and cost are computed (cost = nights x price per night)
    /// 5. The user's balance must cover the cost
    /// 6. The room must be free for the requested [check-in, check-out)
    ///    range
    /// 7. Commit: the booking is appended and the cost deducted from the
    ///    user's balance
    ///
    /// Step 7 is the sole mutation point; failures leave the ledger
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `BookingError` if any validation step fails.
    pub fn book(&mut self, request: &BookingRequest) -> Result<Booking, BookingError> {
        let user_pos = self
            .users
            .iter()
            .position(|user| user.id == request.user_id)
            .ok_or(BookingError::UserNotFound(request.user_id))?;

        let room = self
            .find_room(request.room_number)
            .ok_or(BookingError::RoomNotFound(request.room_number))?;
        let price_per_night = room.price_per_night;

        let today = self.clock.utc().date_naive();
        validate_stay(request.check_in, request.check_out, today)?;

        let nights = nights_between(request.check_in, request.check_out);
        let cost = price_per_night.times(nights);

        let balance = self.users[user_pos].balance;
        if balance < cost {
            return Err(BookingError::InsufficientFunds { balance, cost });
        }

        if !self.is_room_available(request.room_number, request.check_in, request.check_out) {
            return Err(BookingError::RoomUnavailable {
                room: request.room_number,
                check_in: request.check_in,
                check_out: request.check_out,
            });
        }

        let booking = Booking {
            user_id: request.user_id,
            room_number: request.room_number,
            check_in: request.check_in,
            check_out: request.check_out,
            nights,
            total_cost: cost,
        };
        self.bookings.push(booking);
        self.users[user_pos].balance -= cost;

        Ok(booking)
    }

    /// Iterates the registered rooms, most recently added first.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().rev()
    }

    /// Iterates the registered users, most recently added first.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter().rev()
    }

    /// Iterates the accepted bookings, most recently added first.
    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().rev()
    }

    fn find_room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    fn is_room_available(
        &self,
        number: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> bool {
        !self.bookings.iter().any(|booking| {
            booking.room_number == number
                && ranges_overlap(check_in, check_out, booking.check_in, booking.check_out)
        })
    }
}
