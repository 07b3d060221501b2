// waypoint/examples/basic_wizard.rs

use std::fmt;
use std::sync::Arc;
use tracing::info;
use waypoint::{Record, StepCatalog, Submission, Transition, ValidationResult, Wizard, WizardError, WizardResult};

// 1. Describe the record the wizard fills in, and how its fields are addressed.
#[derive(Clone, Debug, Default)]
struct EventSignup {
  attendee: String,
  workshop: String,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Field {
  Attendee,
  Workshop,
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Field::Attendee => f.write_str("attendee"),
      Field::Workshop => f.write_str("workshop"),
    }
  }
}

impl Record for EventSignup {
  type Path = Field;
  type Value = String;
  type Slice = String;

  fn get(&self, path: &Field) -> String {
    match path {
      Field::Attendee => self.attendee.clone(),
      Field::Workshop => self.workshop.clone(),
    }
  }

  fn set(&mut self, path: &Field, value: String) -> WizardResult<()> {
    match path {
      Field::Attendee => self.attendee = value,
      Field::Workshop => self.workshop = value,
    }
    Ok(())
  }

  fn owning_step(path: &Field) -> &'static str {
    match path {
      Field::Attendee => "attendee",
      Field::Workshop => "workshop",
    }
  }

  fn slice(&self, step_id: &str) -> Option<String> {
    match step_id {
      "attendee" => Some(self.attendee.clone()),
      "workshop" => Some(self.workshop.clone()),
      _ => None,
    }
  }
}

// 2. Per-step validation. Pure: look at the slice, report field errors.
fn validate(step_id: &str, value: &String) -> ValidationResult<Field> {
  let field = if step_id == "attendee" { Field::Attendee } else { Field::Workshop };
  if value.trim().is_empty() {
    ValidationResult::ok().with_error(field, "This field is required")
  } else {
    ValidationResult::ok()
  }
}

#[tokio::main]
async fn main() -> Result<(), WizardError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Wizard Example ---");

  // 3. The catalog. The last step is only reachable by committing.
  let catalog = StepCatalog::new(&[
    ("attendee", "Attendee"),
    ("workshop", "Workshop"),
    ("confirmation", "Confirmation"),
  ])?;

  // 4. The item being booked must be known before the wizard starts.
  let event = Arc::new("RustConf 2026".to_string());
  let mut wizard = Wizard::<EventSignup, String>::new(catalog, validate, Some(event))?;

  wizard.on_submit(|submission: Submission<EventSignup, String>| async move {
    info!(
      "Saving signup {} for {}: {:?}",
      submission.booking_reference, submission.item, submission.record
    );
    Ok::<(), anyhow::Error>(())
  });

  // 5. "Next" on an empty step is rejected with field errors.
  if let Transition::Rejected { errors, .. } = wizard.advance().await? {
    for (field, message) in errors.errors() {
      info!("{}: {}", field, message);
    }
  }

  wizard.set_field(&Field::Attendee, "Ferris".to_string())?;
  wizard.advance().await?;
  wizard.set_field(&Field::Workshop, "Async in depth".to_string())?;

  // 6. Advancing from the last editable step commits.
  match wizard.advance().await? {
    Transition::Committed { reference, step } => info!("Committed as {} (now on '{}')", reference, step),
    other => info!("Unexpected outcome: {:?}", other),
  }

  for entry in wizard.progress().iter() {
    info!("{:>14} [{}]", entry.step.display_name, entry.status.as_str());
  }

  Ok(())
}
