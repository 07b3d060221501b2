// travel_booking/src/booking/confirm.rs

//! The submit handler run when a booking commits: record it, then tell the traveller.

use crate::booking::record::BookingRecord;
use crate::booking::BookingWizard;
use crate::models::FlightOffer;
use crate::services::ledger::{BookingLedger, ConfirmedBooking};
use crate::services::notifier::ConfirmationNotifier;
use std::sync::Arc;
use tracing::{info, instrument};
use waypoint::Submission;

/// Wires the ledger and notifier into `wizard` as its submit handler.
///
/// The ledger write comes first: if it fails the commit is abandoned and no
/// confirmation is sent.
pub fn register_confirmation_handler(
  wizard: &mut BookingWizard,
  ledger: Arc<BookingLedger>,
  notifier: Arc<ConfirmationNotifier>,
) {
  wizard.on_submit(move |submission: Submission<BookingRecord, FlightOffer>| {
    let ledger = ledger.clone();
    let notifier = notifier.clone();
    async move { confirm_booking(submission, &ledger, &notifier).await }
  });
}

#[instrument(skip_all, fields(reference = %submission.booking_reference, flight = %submission.item.flight_label()))]
async fn confirm_booking(
  submission: Submission<BookingRecord, FlightOffer>,
  ledger: &BookingLedger,
  notifier: &ConfirmationNotifier,
) -> anyhow::Result<()> {
  let booking = ConfirmedBooking::from_submission(&submission);
  ledger.record(booking)?;
  let notice = notifier
    .notify_confirmed(&submission.item, &submission.booking_reference)
    .await?;
  info!(notice_id = %notice.notice_id, "Booking confirmation completed.");
  Ok(())
}
