// waypoint/src/core/control.rs

//! Defines the actions a host can request of a wizard and the outcome of applying one.

use crate::core::validation::ValidationResult;
use crate::wizard::submit::BookingReference;
use serde::Serialize;

/// A discrete user action against the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// "Next": validate the current step and move forward.
    Advance,
    /// "Previous": move back one step without validation.
    Retreat,
    /// Navigate back to an already visited step.
    JumpTo(String),
    /// "Confirm & Pay": validate the whole record and finalize it.
    Commit,
}

/// Outcome of an action that did not fail with a [`WizardError`](crate::WizardError).
///
/// Validation failures are reported here as `Rejected`, never as errors: they are
/// resolved by further edits, not by the caller's error handling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Transition<K: Ord> {
    /// The current step changed.
    Moved { from: String, to: String },
    /// The record was committed and the wizard reached its terminal step.
    Committed { reference: BookingReference, step: String },
    /// Validation did not pass; the current step is unchanged.
    Rejected { step: String, errors: ValidationResult<K> },
    /// Nothing to do (retreat on the first step, jump to the current step).
    Unchanged,
}

impl<K: Ord> Transition<K> {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Transition::Rejected { .. })
    }

    pub fn errors(&self) -> Option<&ValidationResult<K>> {
        match self {
            Transition::Rejected { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
