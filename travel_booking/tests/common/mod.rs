// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::Level;
use travel_booking::config::AppConfig;
use travel_booking::models::sample_offer;
use travel_booking::services::{BookingLedger, ConfirmationNotifier};
use travel_booking::BookingSession;

pub struct Harness {
  pub session: BookingSession,
  pub ledger: Arc<BookingLedger>,
  pub notifier: Arc<ConfirmationNotifier>,
}

pub fn test_config() -> AppConfig {
  AppConfig::default()
}

pub fn new_harness() -> Harness {
  setup_tracing();
  let ledger = Arc::new(BookingLedger::new());
  let notifier = Arc::new(ConfirmationNotifier::new());
  let session = BookingSession::start(Some(sample_offer()), &test_config(), ledger.clone(), notifier.clone()).unwrap();
  Harness {
    session,
    ledger,
    notifier,
  }
}

pub fn fill_passenger(session: &mut BookingSession, index: usize, first: &str, last: &str, email: &str, phone: &str) {
  let field = |name: &str| format!("passengers.{}.{}", index, name);
  session.set(&field("title"), "Mr").unwrap();
  session.set(&field("firstName"), first).unwrap();
  session.set(&field("lastName"), last).unwrap();
  session.set(&field("email"), email).unwrap();
  session.set(&field("phone"), phone).unwrap();
}

pub fn fill_rohan(session: &mut BookingSession) {
  fill_passenger(session, 0, "Rohan", "Sharma", "rohan@example.com", "9876543210");
}

pub fn fill_payment(session: &mut BookingSession, card_number: &str, agree: bool) {
  session.set("payment.cardHolderName", "Rohan Sharma").unwrap();
  session.set("payment.cardNumber", card_number).unwrap();
  session.set("payment.expiryDate", "12/27").unwrap();
  session.set("payment.cvv", "123").unwrap();
  session.set("payment.agreeToTerms", agree).unwrap();
}

/// A session with a valid passenger, default add-ons, sitting on the payment step.
pub async fn harness_at_payment() -> Harness {
  let mut h = new_harness();
  fill_rohan(&mut h.session);
  h.session.next().await.unwrap();
  h.session.next().await.unwrap();
  assert_eq!(h.session.current_step_id(), "payment");
  h
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
