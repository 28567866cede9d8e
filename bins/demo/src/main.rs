//! Stayledger demo harness.
//!
//! Registers sample rooms and users, runs a scripted sequence of booking
//! attempts with known expected outcomes, and prints the final ledger
//! tables.
//!
//! Usage: cargo run --bin demo

mod report;

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;
use stayledger_core::booking::{BookingLedger, BookingRequest, RoomCategory};
use stayledger_shared::{AppConfig, Money, RoomNumber, UserId};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Clock pinned to a configured date so the scripted run is reproducible.
struct PinnedClock {
    today: NaiveDate,
}

impl Clock for PinnedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.today.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc()
    }
}

/// One scripted booking attempt with its expected outcome.
struct Scenario {
    label: &'static str,
    request: BookingRequest,
    /// Expected error code, or None when the booking should succeed.
    expected_error: Option<&'static str>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stayledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    let today = config.demo.today.unwrap_or_else(default_today);
    info!(%today, "demo clock pinned");

    let mut ledger = BookingLedger::with_clock(Arc::new(PinnedClock { today }));
    seed(&mut ledger);

    println!("=== Testing Bookings ===\n");
    for scenario in scenarios() {
        run_scenario(&mut ledger, &scenario);
    }

    // Re-registering an existing room must be ignored
    println!("\n=== Testing register_room ===");
    ledger.register_room(RoomNumber::new(1), RoomCategory::Suite, Money::new(10000));
    println!("register_room called on existing room - ignored");

    println!("\n=== Final Results ===\n");
    println!("Rooms Data:");
    print!("{}", report::render_rooms(ledger.rooms()));
    println!("\nBookings Data:");
    print!("{}", report::render_bookings(ledger.bookings()));
    println!("\n===================\n");
    print!("{}", report::render_users(ledger.users()));

    Ok(())
}

/// First of June 2026, just before the scripted stays.
fn default_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Registers the sample rooms and users.
fn seed(ledger: &mut BookingLedger) {
    ledger.register_room(RoomNumber::new(1), RoomCategory::Standard, Money::new(1000));
    ledger.register_room(RoomNumber::new(2), RoomCategory::Junior, Money::new(2000));
    ledger.register_room(RoomNumber::new(3), RoomCategory::Suite, Money::new(3000));

    ledger.register_user(UserId::new(1), Money::new(5000));
    ledger.register_user(UserId::new(2), Money::new(10000));
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            label: "Test 1 (balance too low)",
            request: request(1, 2, date(2026, 6, 30), date(2026, 7, 7)),
            expected_error: Some("INSUFFICIENT_FUNDS"),
        },
        Scenario {
            label: "Test 2 (check-out before check-in)",
            request: request(1, 2, date(2026, 7, 7), date(2026, 6, 30)),
            expected_error: Some("INVALID_DATES"),
        },
        Scenario {
            label: "Test 3 (user 1 books room 1)",
            request: request(1, 1, date(2026, 7, 7), date(2026, 7, 8)),
            expected_error: None,
        },
        Scenario {
            label: "Test 4 (overlapping stay)",
            request: request(2, 1, date(2026, 7, 7), date(2026, 7, 9)),
            expected_error: Some("ROOM_UNAVAILABLE"),
        },
        Scenario {
            label: "Test 5 (user 2 books room 3)",
            request: request(2, 3, date(2026, 7, 7), date(2026, 7, 8)),
            expected_error: None,
        },
    ]
}

fn request(user: u32, room: u32, check_in: NaiveDate, check_out: NaiveDate) -> BookingRequest {
    BookingRequest {
        user_id: UserId::new(user),
        room_number: RoomNumber::new(room),
        check_in,
        check_out,
    }
}

/// Runs one scripted attempt and prints pass/fail against its expectation.
fn run_scenario(ledger: &mut BookingLedger, scenario: &Scenario) {
    let outcome = ledger.book(&scenario.request);

    match (&outcome, scenario.expected_error) {
        (Ok(booking), None) => {
            println!(
                "{} PASSED: user {} booked room {} for {}",
                scenario.label, booking.user_id, booking.room_number, booking.total_cost
            );
        }
        (Err(err), Some(code)) if err.error_code() == code => {
            println!("{} PASSED: {err}", scenario.label);
        }
        (Ok(_), Some(code)) => {
            println!("{} FAILED: expected {code}, booking was accepted", scenario.label);
        }
        (Err(err), _) => {
            println!("{} FAILED: {err}", scenario.label);
        }
    }
}
