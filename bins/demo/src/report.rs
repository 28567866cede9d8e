//! Table rendering for ledger listings.
//!
//! Formats the listing reads as plain-text tables, dates as day/month/year.
//! The ledger itself knows nothing about presentation.

use stayledger_core::booking::{Booking, Room, User};

/// Date format used in booking tables.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Renders the rooms table, one row per room in the order given.
pub fn render_rooms<'a>(rooms: impl Iterator<Item = &'a Room>) -> String {
    let mut out = String::from("|| Room Number || Type || Price Per Night ||\n");
    for room in rooms {
        out.push_str(&format!(
            "   {}   {}   {}\n",
            room.number, room.category, room.price_per_night
        ));
    }
    out
}

/// Renders the users table, one row per user in the order given.
pub fn render_users<'a>(users: impl Iterator<Item = &'a User>) -> String {
    let mut out = String::from("|| UserId || Balance ||\n");
    for user in users {
        out.push_str(&format!("   {}   {}\n", user.id, user.balance));
    }
    out
}

/// Renders the bookings table, one row per booking in the order given.
pub fn render_bookings<'a>(bookings: impl Iterator<Item = &'a Booking>) -> String {
    let mut out = String::from("|| User || Room || CheckIn || CheckOut ||\n");
    for booking in bookings {
        out.push_str(&format!(
            "   {}   {}   {}   {}\n",
            booking.user_id,
            booking.room_number,
            booking.check_in.format(DATE_FORMAT),
            booking.check_out.format(DATE_FORMAT)
        ));
    }
    out
}
