//! Booking error types.
//!
//! Every variant is a caller input/state error; the ledger has no internal
//! fault conditions.

use chrono::NaiveDate;
use stayledger_shared::{Money, RoomNumber, UserId};
use thiserror::Error;

/// Errors that can occur during booking operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// User not found.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Room not found.
    #[error("Room not found: {0}")]
    RoomNotFound(RoomNumber),

    /// The stay dates are invalid (reversed, in the past, or zero nights).
    #[error("Invalid stay dates: check-in {check_in}, check-out {check_out}")]
    InvalidDates {
        /// Requested check-in date.
        check_in: NaiveDate,
        /// Requested check-out date.
        check_out: NaiveDate,
    },

    /// The user's balance does not cover the stay.
    #[error("Insufficient balance: have {balance}, stay costs {cost}")]
    InsufficientFunds {
        /// The user's balance at the time of the request.
        balance: Money,
        /// The computed cost of the stay.
        cost: Money,
    },

    /// The room is already booked for an overlapping date range.
    #[error("Room {room} is unavailable from {check_in} to {check_out}")]
    RoomUnavailable {
        /// The requested room.
        room: RoomNumber,
        /// Requested check-in date.
        check_in: NaiveDate,
        /// Requested check-out date.
        check_out: NaiveDate,
    },
}

impl BookingError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::RoomNotFound(_) => "ROOM_NOT_FOUND",
            Self::InvalidDates { .. } => "INVALID_DATES",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::RoomUnavailable { .. } => "ROOM_UNAVAILABLE",
        }
    }
}
