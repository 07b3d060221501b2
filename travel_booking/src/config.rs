// travel_booking/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_REFERENCE_PREFIX: &str = "TRV";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!(
        "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// JSON session script to replay. The built-in scenario runs when unset.
  pub script_path: Option<PathBuf>,
  pub reference_prefix: String,
  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      script_path: None,
      reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
      log_format: LogFormat::Pretty,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let script_path = lookup("BOOKING_SCRIPT")
      .filter(|p| !p.trim().is_empty())
      .map(PathBuf::from);

    let reference_prefix = lookup("BOOKING_REFERENCE_PREFIX").unwrap_or_else(|| DEFAULT_REFERENCE_PREFIX.to_string());
    if reference_prefix.is_empty() || !reference_prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
      return Err(AppError::Config(format!(
        "Invalid BOOKING_REFERENCE_PREFIX '{}': expected ASCII letters or digits",
        reference_prefix
      )));
    }

    let log_format = match lookup("LOG_FORMAT") {
      Some(raw) => raw.parse::<LogFormat>()?,
      None => LogFormat::default(),
    };

    tracing::debug!(?script_path, %reference_prefix, ?log_format, "Application configuration loaded.");

    Ok(Self {
      script_path,
      reference_prefix: reference_prefix.to_ascii_uppercase(),
      log_format,
    })
  }
}
