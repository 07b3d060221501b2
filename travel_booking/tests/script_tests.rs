// tests/script_tests.rs
mod common;

use common::*;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use travel_booking::errors::AppError;
use travel_booking::script::{run_script, Script, ScriptOp};
use travel_booking::services::{BookingLedger, ConfirmationNotifier};

fn services() -> (Arc<BookingLedger>, Arc<ConfirmationNotifier>) {
  (Arc::new(BookingLedger::new()), Arc::new(ConfirmationNotifier::new()))
}

#[tokio::test]
async fn test_builtin_scenario_confirms_booking() {
  setup_tracing();
  let (ledger, notifier) = services();

  let report = run_script(Script::builtin(), &test_config(), ledger.clone(), notifier.clone())
    .await
    .unwrap();

  // Empty passenger and the 15-digit card.
  assert_eq!(report.rejected_count(), 2);
  let reference = report.booking_reference().expect("scenario commits").to_string();
  assert!(reference.starts_with("TRV-"));
  assert!(ledger.get(&reference).is_some());
  assert_eq!(notifier.sent().len(), 1);

  let last = report.actions.last().unwrap();
  assert_eq!(last.op, "commit");
  assert_eq!(last.outcome["outcome"], "committed");
  assert_eq!(last.current_step, "confirmation");
  assert_eq!(
    last.progress,
    "[x] Passenger Details > [x] Add-ons > [x] Payment > [>] Confirmation"
  );

  let state = report.final_state.as_ref().unwrap();
  assert_eq!(state["bookingReference"], reference.as_str());
  assert_eq!(state["record"]["payment"]["cardNumber"], "**** **** **** 1111");
}

#[tokio::test]
async fn test_script_file_without_offer_key_books_sample_flight() {
  setup_tracing();
  let mut file = NamedTempFile::new().unwrap();
  write!(
    file,
    r#"{{
      "actions": [
        {{ "op": "set", "path": "passengers.0.title", "value": "Ms" }},
        {{ "op": "set", "path": "passengers.0.firstName", "value": "Meera" }},
        {{ "op": "set", "path": "passengers.0.lastName", "value": "Rao" }},
        {{ "op": "set", "path": "passengers.0.email", "value": "meera@example.com" }},
        {{ "op": "set", "path": "passengers.0.phone", "value": "9000000001" }},
        {{ "op": "next" }},
        {{ "op": "set", "path": "addons.extraBaggage", "value": "5kg" }},
        {{ "op": "click", "step": "passenger" }},
        {{ "op": "click", "step": "payment" }},
        {{ "op": "previous" }}
      ]
    }}"#
  )
  .unwrap();

  let script = Script::from_path(file.path()).unwrap();
  assert_eq!(script.offer.as_ref().unwrap().flight_number, "6E 204");

  let (ledger, notifier) = services();
  let report = run_script(script, &test_config(), ledger.clone(), notifier).await.unwrap();

  let steps: Vec<&str> = report.actions.iter().map(|a| a.current_step.as_str()).collect();
  assert_eq!(steps[5], "addons");
  // Click on a completed step jumps back; a click on a pending one is ignored.
  assert_eq!(steps[7], "passenger");
  assert_eq!(report.actions[8].outcome["outcome"], "unchanged");
  assert_eq!(steps[9], "passenger");
  assert!(report.confirmation.is_none());
  assert!(ledger.is_empty());

  let state = report.final_state.unwrap();
  assert_eq!(state["record"]["addons"]["extraBaggage"], "5kg");
}

#[tokio::test]
async fn test_null_offer_shows_booking_error_page() {
  setup_tracing();
  let script = Script::from_json(r#"{ "offer": null, "actions": [ { "op": "next" } ] }"#).unwrap();
  assert!(script.offer.is_none());

  let (ledger, notifier) = services();
  let report = run_script(script, &test_config(), ledger, notifier).await.unwrap();

  let page = report.error_page.expect("error page");
  assert_eq!(page.title, "Booking Error");
  assert_eq!(page.action, "Back to Search");
  assert!(report.actions.is_empty());
  assert!(report.final_state.is_none());
}

#[tokio::test]
async fn test_action_errors_are_reported_and_run_continues() {
  setup_tracing();
  let script = Script {
    offer: Some(travel_booking::models::sample_offer()),
    actions: vec![
      ScriptOp::Set {
        path: "passengers.0.nickname".to_string(),
        value: "Ro".into(),
      },
      ScriptOp::Commit,
      ScriptOp::Previous,
    ],
  };

  let (ledger, notifier) = services();
  let report = run_script(script, &test_config(), ledger, notifier).await.unwrap();

  assert_eq!(report.actions[0].outcome["outcome"], "error");
  assert_eq!(report.actions[0].outcome["kind"], "Programmer");
  assert_eq!(report.actions[1].outcome["outcome"], "error");
  assert_eq!(report.actions[2].outcome["outcome"], "unchanged");
}

#[test]
fn test_malformed_script() {
  let err = Script::from_json(r#"{ "actions": [ { "op": "teleport" } ] }"#).unwrap_err();
  assert!(matches!(err, AppError::Script(_)));
}

#[test]
fn test_missing_script_file() {
  let err = Script::from_path(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
  assert!(matches!(err, AppError::Io(_)));
}
