//! Room booking logic.
//!
//! This module implements the core booking functionality:
//! - Room and user registration (idempotent by id)
//! - Booking requests and their stored, resolved form
//! - Stay date and interval-overlap validation
//! - Error types for booking operations
//! - The booking ledger holding all three collections

pub mod error;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod validation_props;

pub use error::BookingError;
pub use service::BookingLedger;
pub use types::{Booking, BookingRequest, Room, RoomCategory, User};
pub use validation::{nights_between, ranges_overlap, validate_stay};
