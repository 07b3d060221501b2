// travel_booking/src/script.rs

//! Replays a recorded sequence of user actions against a booking session.
//!
//! Script format (JSON):
//! ```json
//! { "offer": { ... } | null, "actions": [ { "op": "set", "path": "...", "value": ... }, { "op": "next" } ] }
//! ```
//! Leaving `offer` out books the sample flight; `null` means no flight was chosen.

use crate::booking::FieldValue;
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::{sample_offer, FlightOffer};
use crate::services::{BookingLedger, ConfirmationNotifier};
use crate::session::{BookingOutcome, BookingSession, ConfirmationView, ErrorPage, MISSING_OFFER_PAGE};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ScriptOp {
  Set { path: String, value: FieldValue },
  Next,
  Previous,
  Click { step: String },
  Commit,
}

impl ScriptOp {
  fn label(&self) -> String {
    match self {
      ScriptOp::Set { path, .. } => format!("set {}", path),
      ScriptOp::Next => "next".to_string(),
      ScriptOp::Previous => "previous".to_string(),
      ScriptOp::Click { step } => format!("click {}", step),
      ScriptOp::Commit => "commit".to_string(),
    }
  }
}

fn default_offer() -> Option<FlightOffer> {
  Some(sample_offer())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
  #[serde(default = "default_offer")]
  pub offer: Option<FlightOffer>,
  #[serde(default)]
  pub actions: Vec<ScriptOp>,
}

impl Script {
  pub fn from_json(raw: &str) -> Result<Self> {
    serde_json::from_str(raw).map_err(|e| AppError::Script(format!("Malformed booking script: {}", e)))
  }

  pub fn from_path(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)?;
    Self::from_json(&raw)
  }

  /// The reference walkthrough: an invalid passenger, a valid one, default add-ons,
  /// a short card number, then a corrected card and a successful confirmation.
  pub fn builtin() -> Self {
    let set = |path: &str, value: FieldValue| ScriptOp::Set {
      path: path.to_string(),
      value,
    };
    Script {
      offer: default_offer(),
      actions: vec![
        ScriptOp::Next,
        set("passengers.0.title", "Mr".into()),
        set("passengers.0.firstName", "Rohan".into()),
        set("passengers.0.lastName", "Sharma".into()),
        set("passengers.0.email", "rohan@example.com".into()),
        set("passengers.0.phone", "9876543210".into()),
        ScriptOp::Next,
        ScriptOp::Next,
        set("payment.cardHolderName", "Rohan Sharma".into()),
        set("payment.cardNumber", "411111111111111".into()),
        set("payment.expiryDate", "12/27".into()),
        set("payment.cvv", "123".into()),
        ScriptOp::Commit,
        set("payment.cardNumber", "4111111111111111".into()),
        set("payment.agreeToTerms", true.into()),
        ScriptOp::Commit,
      ],
    }
  }
}

/// What happened for one scripted action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReport {
  pub op: String,
  pub outcome: Value,
  pub current_step: String,
  pub progress: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptReport {
  pub actions: Vec<ActionReport>,
  /// Final wizard state, card data masked. Absent when the session never started.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub final_state: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub confirmation: Option<ConfirmationView>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_page: Option<ErrorPage>,
}

impl ScriptReport {
  pub fn booking_reference(&self) -> Option<&str> {
    self.confirmation.as_ref().map(|c| c.booking_reference.as_str())
  }

  pub fn rejected_count(&self) -> usize {
    self
      .actions
      .iter()
      .filter(|a| a.outcome["outcome"] == "rejected")
      .count()
  }
}

fn outcome_json(outcome: Result<BookingOutcome>) -> Result<Value> {
  match outcome {
    Ok(transition) => Ok(serde_json::to_value(&transition)?),
    Err(err) => {
      warn!(error = %err, "Scripted action failed.");
      Ok(json!({
        "outcome": "error",
        "kind": err.wizard_kind().map(|k| format!("{:?}", k)),
        "message": err.to_string(),
      }))
    }
  }
}

/// Runs `script` in a fresh session. Action errors are reported and the run continues;
/// a missing offer ends the run with the booking error page.
#[instrument(skip_all, fields(num_actions = script.actions.len()))]
pub async fn run_script(
  script: Script,
  config: &AppConfig,
  ledger: Arc<BookingLedger>,
  notifier: Arc<ConfirmationNotifier>,
) -> Result<ScriptReport> {
  let mut session = match BookingSession::start(script.offer, config, ledger, notifier) {
    Ok(session) => session,
    Err(err) if err.is_missing_offer() => {
      warn!("No flight offer supplied; showing booking error page.");
      return Ok(ScriptReport {
        actions: Vec::new(),
        final_state: None,
        confirmation: None,
        error_page: Some(MISSING_OFFER_PAGE),
      });
    }
    Err(err) => return Err(err),
  };

  let mut actions = Vec::with_capacity(script.actions.len());
  for op in script.actions {
    let label = op.label();
    let outcome = match op {
      ScriptOp::Set { path, value } => session.set(&path, value).map(|_| BookingOutcome::Unchanged),
      ScriptOp::Next => session.next().await,
      ScriptOp::Previous => session.previous(),
      ScriptOp::Click { step } => session.click(&step),
      ScriptOp::Commit => session.confirm().await,
    };
    let outcome = outcome_json(outcome)?;
    info!(op = %label, outcome = %outcome["outcome"], step = %session.current_step_id(), "Scripted action applied.");
    actions.push(ActionReport {
      op: label,
      outcome,
      current_step: session.current_step_id().to_string(),
      progress: session.progress_line(),
    });
  }

  Ok(ScriptReport {
    actions,
    final_state: Some(serde_json::to_value(session.masked_state())?),
    confirmation: session.confirmation(),
    error_page: None,
  })
}

