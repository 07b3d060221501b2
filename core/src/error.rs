// waypoint/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Step not found in catalog: {step_id}")]
    UnknownStep { step_id: String },

    #[error("Wizard cannot start without an item context")]
    MissingItemContext,

    #[error("Invalid step catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Invalid field path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Invalid value for field '{path}': {reason}")]
    InvalidValue { path: String, reason: String },

    #[error("Cannot jump forward from '{from}' to '{to}'; forward progress requires advancing")]
    ForwardJump { from: String, to: String },

    #[error("Commit is only allowed from step '{commit_step}' (current step: '{current}')")]
    CommitOutsideStep { current: String, commit_step: String },

    #[error("Booking already committed with reference {reference}")]
    AlreadyCommitted { reference: String },

    #[error("No submit handler registered for commit step '{step_id}'")]
    HandlerMissing { step_id: String },

    #[error("Submit handler failed for booking {reference}. Source: {source}")]
    SubmitFailed {
        reference: String,
        #[source]
        source: AnyhowError,
    },

    #[error("Internal wizard error: {0}")]
    Internal(String),
}

/// Coarse classification of a [`WizardError`], mirroring how a host is expected to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The wizard refused to start (missing item context). Render a full-page error state.
    Precondition,
    /// An invariant was violated by the caller (unknown step, bad path, illegal transition).
    Programmer,
    /// The catalog or handler wiring is incomplete.
    Configuration,
    /// The external submit handler failed; wizard state was left untouched.
    Submission,
}

impl WizardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WizardError::MissingItemContext => ErrorKind::Precondition,
            WizardError::InvalidCatalog { .. } | WizardError::HandlerMissing { .. } => ErrorKind::Configuration,
            WizardError::SubmitFailed { .. } => ErrorKind::Submission,
            WizardError::UnknownStep { .. }
            | WizardError::InvalidPath { .. }
            | WizardError::InvalidValue { .. }
            | WizardError::ForwardJump { .. }
            | WizardError::CommitOutsideStep { .. }
            | WizardError::AlreadyCommitted { .. }
            | WizardError::Internal(_) => ErrorKind::Programmer,
        }
    }

    pub(crate) fn unknown_step(step_id: &str) -> Self {
        WizardError::UnknownStep {
            step_id: step_id.to_string(),
        }
    }
}

pub type WizardResult<T, E = WizardError> = std::result::Result<T, E>;
