// travel_booking/src/lib.rs

//! Flight booking on top of the `waypoint` wizard engine.
//!
//! A booking walks four steps (passenger details, add-ons, payment, confirmation).
//! Confirming records the booking in an in-memory ledger and sends a confirmation
//! notice; both are wired in as the wizard's submit handler.

pub mod booking;
pub mod config;
pub mod errors;
pub mod models;
pub mod script;
pub mod services;
pub mod session;

pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use session::BookingSession;
