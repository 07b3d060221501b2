// travel_booking/src/errors.rs

use thiserror::Error;
use waypoint::{ErrorKind, WizardError};

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Script Error: {0}")]
  Script(String),

  #[error("Booking Conflict: {0}")]
  Conflict(String),

  #[error("Wizard Error: {source}")]
  Wizard {
    #[from] // Allows conversion from waypoint::WizardError
    source: WizardError,
  },

  #[error("JSON Error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl AppError {
  /// `true` when the wizard refused to start because no flight offer was supplied.
  /// Hosts render the "Booking Error" page for this case instead of a wizard.
  pub fn is_missing_offer(&self) -> bool {
    matches!(
      self,
      AppError::Wizard {
        source: WizardError::MissingItemContext
      }
    )
  }

  /// The engine's classification, for errors raised by the wizard.
  pub fn wizard_kind(&self) -> Option<ErrorKind> {
    match self {
      AppError::Wizard { source } => Some(source.kind()),
      _ => None,
    }
  }
}

// Submit handlers return anyhow::Error; fold it back into AppError where one surfaces.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<AppError>() {
      Ok(app_err) => app_err,
      Err(other) => AppError::Internal(other.to_string()),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
