//! Booking domain types.
//!
//! This module defines the entities held by the booking ledger and the
//! input type for booking requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stayledger_shared::{Money, RoomNumber, UserId};

/// Room category tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    /// Standard room.
    Standard,
    /// Junior suite.
    Junior,
    /// Full suite.
    Suite,
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "STANDARD"),
            Self::Junior => write!(f, "JUNIOR"),
            Self::Suite => write!(f, "SUITE"),
        }
    }
}

impl std::str::FromStr for RoomCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STANDARD" => Ok(Self::Standard),
            "JUNIOR" => Ok(Self::Junior),
            "SUITE" => Ok(Self::Suite),
            _ => Err(format!("Unknown room category: {s}")),
        }
    }
}

/// A bookable room. Immutable once registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// The unique room number.
    pub number: RoomNumber,
    /// The category tier.
    pub category: RoomCategory,
    /// Price for one night, in whole currency units.
    pub price_per_night: Money,
}

/// A registered user with a spendable balance.
///
/// Equality and hashing are by id alone; the balance is mutable state owned
/// by the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct User {
    /// The unique user id.
    pub id: UserId,
    /// Current balance in whole currency units.
    pub balance: Money,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Input for a booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// The user requesting the stay.
    pub user_id: UserId,
    /// The room to book.
    pub room_number: RoomNumber,
    /// First night of the stay (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
}

/// An accepted booking, resolved and stored by the ledger.
///
/// References the user and room by id; the ledger retains the canonical
/// entities. The night count and total cost are captured at acceptance time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The user who booked.
    pub user_id: UserId,
    /// The booked room.
    pub room_number: RoomNumber,
    /// First night of the stay (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Number of billed nights.
    pub nights: i64,
    /// Total cost charged at acceptance (nights x price per night).
    pub total_cost: Money,
}
