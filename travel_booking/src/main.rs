// travel_booking/src/main.rs

use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;
use travel_booking::config::{AppConfig, LogFormat};
use travel_booking::errors::Result as AppResult;
use travel_booking::script::{run_script, Script};
use travel_booking::services::{BookingLedger, ConfirmationNotifier};

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE);
  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

#[tokio::main]
async fn main() -> AppResult<()> {
  let config = AppConfig::from_env()?;
  init_tracing(config.log_format);

  tracing::info!(reference_prefix = %config.reference_prefix, "Starting booking demo...");

  let script = match &config.script_path {
    Some(path) => {
      tracing::info!(path = %path.display(), "Loading booking script.");
      Script::from_path(path)?
    }
    None => {
      tracing::info!("No BOOKING_SCRIPT set; running the built-in scenario.");
      Script::builtin()
    }
  };

  let ledger = Arc::new(BookingLedger::new());
  let notifier = Arc::new(ConfirmationNotifier::new());

  let report = match run_script(script, &config, ledger.clone(), notifier.clone()).await {
    Ok(report) => report,
    Err(e) => {
      tracing::error!(error = %e, "Booking session failed.");
      return Err(e);
    }
  };

  println!("{}", serde_json::to_string_pretty(&report)?);
  println!("{}", serde_json::to_string_pretty(&ledger.all())?);
  for notice in notifier.sent() {
    println!("{}: {}", notice.title, notice.description);
  }

  Ok(())
}
