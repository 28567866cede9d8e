//! Shared types and configuration for Stayledger.
//!
//! This crate provides common types used across all other crates:
//! - Integer money amounts
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::{Money, RoomNumber, UserId};
