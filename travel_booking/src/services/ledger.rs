// travel_booking/src/services/ledger.rs

//! In-memory record of confirmed bookings.

use crate::booking::record::BookingRecord;
use crate::errors::{AppError, Result as AppResult};
use crate::models::{FareSummary, FlightOffer};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{info, warn};
use waypoint::{BookingReference, Submission};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedBooking {
  pub reference: BookingReference,
  pub offer_id: String,
  pub flight: String,
  pub route: String,
  pub lead_passenger: String,
  pub passenger_count: usize,
  /// Only the last four digits are ever kept.
  pub card_last_four: String,
  pub fare: FareSummary,
  pub confirmed_at: DateTime<Utc>,
}

impl ConfirmedBooking {
  pub fn from_submission(submission: &Submission<BookingRecord, FlightOffer>) -> Self {
    let record = &submission.record;
    let offer = submission.item.as_ref();
    Self {
      reference: submission.booking_reference.clone(),
      offer_id: offer.id.clone(),
      flight: offer.flight_label(),
      route: offer.route(),
      lead_passenger: record.lead_passenger().map(|p| p.full_name()).unwrap_or_default(),
      passenger_count: record.passengers.len(),
      card_last_four: record.payment.card_last_four(),
      fare: FareSummary::compute(offer, record),
      confirmed_at: Utc::now(),
    }
  }
}

/// Confirmed bookings, keyed by reference. Shared between sessions behind an `Arc`.
#[derive(Debug, Default)]
pub struct BookingLedger {
  bookings: RwLock<Vec<ConfirmedBooking>>,
}

impl BookingLedger {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stores `booking`. A reference can only be recorded once.
  pub fn record(&self, booking: ConfirmedBooking) -> AppResult<()> {
    let mut bookings = self.bookings.write();
    if bookings.iter().any(|b| b.reference == booking.reference) {
      warn!(reference = %booking.reference, "Rejected duplicate booking reference.");
      return Err(AppError::Conflict(format!(
        "booking {} has already been recorded",
        booking.reference
      )));
    }
    info!(
      reference = %booking.reference,
      route = %booking.route,
      passengers = booking.passenger_count,
      total = booking.fare.total,
      "Booking recorded in ledger."
    );
    bookings.push(booking);
    Ok(())
  }

  pub fn get(&self, reference: &str) -> Option<ConfirmedBooking> {
    self
      .bookings
      .read()
      .iter()
      .find(|b| b.reference.as_str() == reference)
      .cloned()
  }

  pub fn all(&self) -> Vec<ConfirmedBooking> {
    self.bookings.read().clone()
  }

  pub fn len(&self) -> usize {
    self.bookings.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.bookings.read().is_empty()
  }
}
