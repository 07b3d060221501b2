// travel_booking/src/services/mod.rs

pub mod ledger;
pub mod notifier;

pub use ledger::{BookingLedger, ConfirmedBooking};
pub use notifier::{ConfirmationNotifier, Notice};
