// travel_booking/src/services/notifier.rs
use crate::errors::Result as AppResult;
use crate::models::FlightOffer;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::info;
use waypoint::BookingReference;

pub const CONFIRMATION_TITLE: &str = "Booking Confirmed!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
  pub notice_id: String,
  pub title: String,
  pub description: String,
}

/// Mock notification channel. Keeps every notice it "sent" so hosts can display them.
#[derive(Debug, Default)]
pub struct ConfirmationNotifier {
  sent: Mutex<Vec<Notice>>,
}

pub fn confirmation_description(offer: &FlightOffer, reference: &BookingReference) -> String {
  format!(
    "Your flight for {} to {} is confirmed. Booking ID: {}",
    offer.origin.city, offer.destination.city, reference
  )
}

impl ConfirmationNotifier {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn notify_confirmed(&self, offer: &FlightOffer, reference: &BookingReference) -> AppResult<Notice> {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await; // Simulate delivery latency

    let notice = Notice {
      notice_id: format!("mock_notice_{}", uuid::Uuid::new_v4()),
      title: CONFIRMATION_TITLE.to_string(),
      description: confirmation_description(offer, reference),
    };
    info!(notice_id = %notice.notice_id, "{}: {}", notice.title, notice.description);
    self.sent.lock().push(notice.clone());
    Ok(notice)
  }

  pub fn sent(&self) -> Vec<Notice> {
    self.sent.lock().clone()
  }

  pub fn last(&self) -> Option<Notice> {
    self.sent.lock().last().cloned()
  }
}
