// travel_booking/src/booking/mod.rs

//! The flight-booking wizard: catalog, record, schema and commit handling.

pub mod catalog;
pub mod confirm;
pub mod record;
pub mod schema;

pub use catalog::{booking_catalog, ADDONS_STEP, CONFIRMATION_STEP, PASSENGER_STEP, PAYMENT_STEP};
pub use confirm::register_confirmation_handler;
pub use record::{
  AddOnField, AddOns, BaggageTier, BookingRecord, BookingSlice, FieldPath, FieldValue, PassengerField, PassengerInfo,
  PaymentField, PaymentInfo,
};
pub use schema::BookingSchema;

use crate::errors::Result;
use crate::models::FlightOffer;
use std::sync::Arc;
use waypoint::Wizard;

pub type BookingWizard = Wizard<BookingRecord, FlightOffer>;

/// Creates a booking wizard for `offer` on the passenger step.
///
/// Fails with `MissingItemContext` when there is no offer to book.
pub fn new_booking_wizard(offer: Option<FlightOffer>, reference_prefix: &str) -> Result<BookingWizard> {
  let mut wizard = Wizard::new(booking_catalog()?, BookingSchema, offer.map(Arc::new))?;
  wizard.set_reference_prefix(reference_prefix);
  Ok(wizard)
}
