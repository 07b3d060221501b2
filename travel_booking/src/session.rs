// travel_booking/src/session.rs

//! One user's booking session: the wizard plus the progress indicator wired to it.

use crate::booking::{new_booking_wizard, register_confirmation_handler, BookingRecord, BookingWizard, FieldPath, FieldValue};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{FareSummary, FlightOffer};
use crate::services::{BookingLedger, ConfirmationNotifier};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use waypoint::{ProgressIndicator, ProgressView, StepStatus, Transition, WizardState};

pub type BookingOutcome = Transition<FieldPath>;

/// Full-page state shown instead of the wizard when there is nothing to book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPage {
  pub title: &'static str,
  pub message: &'static str,
  pub action: &'static str,
}

pub const MISSING_OFFER_PAGE: ErrorPage = ErrorPage {
  title: "Booking Error",
  message: "No item details found to proceed with booking. Please select an item first.",
  action: "Back to Search",
};

/// What the confirmation step shows once a booking has committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationView {
  pub booking_reference: String,
  pub flight: String,
  pub from_city: String,
  pub to_city: String,
  pub fare: FareSummary,
}

pub struct BookingSession {
  wizard: BookingWizard,
  indicator: ProgressIndicator,
  requested_step: Arc<Mutex<Option<String>>>,
}

impl BookingSession {
  /// Starts a session for `offer`, recording confirmed bookings in `ledger`.
  ///
  /// Fails (see [`AppError::is_missing_offer`](crate::errors::AppError::is_missing_offer))
  /// when `offer` is `None`; hosts show [`MISSING_OFFER_PAGE`] in that case.
  pub fn start(
    offer: Option<FlightOffer>,
    config: &AppConfig,
    ledger: Arc<BookingLedger>,
    notifier: Arc<ConfirmationNotifier>,
  ) -> Result<Self> {
    let mut wizard = new_booking_wizard(offer, &config.reference_prefix)?;
    register_confirmation_handler(&mut wizard, ledger, notifier);

    // Clicking a completed step only records the request; the session performs the jump.
    let requested_step = Arc::new(Mutex::new(None));
    let sink = requested_step.clone();
    let indicator = ProgressIndicator::with_on_step_click(move |step_id| {
      *sink.lock() = Some(step_id.to_string());
    });

    info!(flight = %wizard.item().flight_label(), "Booking session started.");
    Ok(Self {
      wizard,
      indicator,
      requested_step,
    })
  }

  pub fn wizard(&self) -> &BookingWizard {
    &self.wizard
  }

  pub fn offer(&self) -> &FlightOffer {
    self.wizard.item()
  }

  pub fn current_step_id(&self) -> &str {
    self.wizard.current_step_id()
  }

  pub fn is_committed(&self) -> bool {
    self.wizard.is_committed()
  }

  pub fn get(&self, path: &str) -> Result<FieldValue> {
    let path: FieldPath = path.parse()?;
    Ok(self.wizard.get(&path))
  }

  /// Writes a field addressed by its string path, e.g. `passengers.0.firstName`.
  pub fn set(&mut self, path: &str, value: impl Into<FieldValue>) -> Result<()> {
    let path: FieldPath = path.parse()?;
    self.set_field(&path, value.into())
  }

  pub fn set_field(&mut self, path: &FieldPath, value: FieldValue) -> Result<()> {
    debug!(%path, "Setting booking field.");
    Ok(self.wizard.set_field(path, value)?)
  }

  /// "Next Step". On the payment step this is "Confirm & Pay".
  pub async fn next(&mut self) -> Result<BookingOutcome> {
    Ok(self.wizard.advance().await?)
  }

  /// "Previous".
  pub fn previous(&mut self) -> Result<BookingOutcome> {
    Ok(self.wizard.retreat()?)
  }

  /// "Confirm & Pay".
  pub async fn confirm(&mut self) -> Result<BookingOutcome> {
    Ok(self.wizard.commit().await?)
  }

  /// A click on the progress indicator. Only completed steps respond.
  #[instrument(skip(self), fields(current = %self.wizard.current_step_id()))]
  pub fn click(&mut self, step_id: &str) -> Result<BookingOutcome> {
    let view = self.progress();
    if !self.indicator.click(&view, step_id) {
      debug!("Click ignored; step is not completed.");
      return Ok(Transition::Unchanged);
    }
    let requested = self.requested_step.lock().take();
    match requested {
      Some(target) => Ok(self.wizard.jump_to(&target)?),
      None => Ok(Transition::Unchanged),
    }
  }

  pub fn progress(&self) -> ProgressView {
    self.wizard.progress()
  }

  /// One-line rendering of the progress indicator, e.g.
  /// `[x] Passenger Details > [>] Add-ons > [ ] Payment > [ ] Confirmation`.
  pub fn progress_line(&self) -> String {
    self
      .progress()
      .iter()
      .map(|entry| {
        let marker = match entry.status {
          StepStatus::Completed => "[x]",
          StepStatus::Current => "[>]",
          StepStatus::Pending => "[ ]",
        };
        format!("{} {}", marker, entry.step.display_name)
      })
      .collect::<Vec<_>>()
      .join(" > ")
  }

  pub fn fare(&self) -> FareSummary {
    FareSummary::compute(self.offer(), &self.wizard.snapshot())
  }

  /// The wizard state with card data masked, safe to print.
  pub fn masked_state(&self) -> WizardState<BookingRecord> {
    let mut state = self.wizard.state();
    state.record = state.record.masked();
    state
  }

  pub fn confirmation(&self) -> Option<ConfirmationView> {
    let reference = self.wizard.booking_reference()?;
    let offer = self.offer();
    Some(ConfirmationView {
      booking_reference: reference.to_string(),
      flight: offer.flight_label(),
      from_city: offer.origin.city.clone(),
      to_city: offer.destination.city.clone(),
      fare: self.fare(),
    })
  }
}

impl std::fmt::Debug for BookingSession {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BookingSession")
      .field("wizard", &self.wizard)
      .field("indicator", &self.indicator)
      .finish()
  }
}
