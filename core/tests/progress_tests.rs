// tests/progress_tests.rs
mod common;

use common::*;
use std::sync::{Arc, Mutex};
use waypoint::{derive_statuses, ProgressIndicator, StepStatus, Transition, WizardError};

#[test]
fn test_statuses_follow_current_ordinal() {
  let catalog = test_catalog();

  let view = derive_statuses(&catalog, "preferences").unwrap();

  let statuses: Vec<_> = view.iter().map(|e| (e.step.id.as_str(), e.status)).collect();
  assert_eq!(
    statuses,
    vec![
      ("account", StepStatus::Completed),
      ("preferences", StepStatus::Current),
      ("review", StepStatus::Pending),
      ("done", StepStatus::Pending),
    ]
  );
  assert_eq!(view.current().unwrap().id, "preferences");
  assert_eq!(view.status_of("done"), Some(StepStatus::Pending));
  assert_eq!(view.status_of("nowhere"), None);
}

#[test]
fn test_exactly_one_current_step_at_every_position() {
  let catalog = test_catalog();
  for step in catalog.steps() {
    let view = derive_statuses(&catalog, &step.id).unwrap();
    let current: Vec<_> = view.iter().filter(|e| e.status == StepStatus::Current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].step.id, step.id);
    let completed = view.iter().filter(|e| e.status == StepStatus::Completed).count();
    assert_eq!(completed, step.ordinal);
  }
}

#[test]
fn test_derive_statuses_unknown_step() {
  let catalog = test_catalog();
  assert!(matches!(
    derive_statuses(&catalog, "nowhere"),
    Err(WizardError::UnknownStep { .. })
  ));
}

#[test]
fn test_status_serializes_lowercase() {
  assert_eq!(serde_json::to_string(&StepStatus::Completed).unwrap(), "\"completed\"");
  assert_eq!(StepStatus::Pending.as_str(), "pending");
}

#[test]
fn test_indicator_without_callback_never_navigates() {
  let catalog = test_catalog();
  let indicator = ProgressIndicator::new();
  let view = indicator.render(&catalog, "review").unwrap();

  assert!(!indicator.is_clickable(StepStatus::Completed));
  assert!(!indicator.click(&view, "account"));
}

#[test]
fn test_indicator_fires_only_for_completed_steps() {
  let catalog = test_catalog();
  let clicks = Arc::new(Mutex::new(Vec::<String>::new()));
  let sink = clicks.clone();
  let indicator = ProgressIndicator::with_on_step_click(move |step_id| sink.lock().unwrap().push(step_id.to_string()));
  let view = indicator.render(&catalog, "preferences").unwrap();

  assert!(indicator.click(&view, "account"));
  assert!(!indicator.click(&view, "preferences"));
  assert!(!indicator.click(&view, "review"));
  assert!(!indicator.click(&view, "nowhere"));
  assert!(indicator.is_clickable(StepStatus::Completed));
  assert!(!indicator.is_clickable(StepStatus::Pending));

  assert_eq!(*clicks.lock().unwrap(), vec!["account".to_string()]);
}

#[tokio::test]
async fn test_indicator_callback_drives_jump_to() {
  setup_tracing();
  let mut wizard = wizard_at_review().await;
  let requested = Arc::new(Mutex::new(None::<String>));
  let sink = requested.clone();
  let indicator = ProgressIndicator::with_on_step_click(move |step_id| *sink.lock().unwrap() = Some(step_id.to_string()));

  let view = wizard.progress();
  assert_eq!(view.status_of("preferences"), Some(StepStatus::Completed));
  assert!(indicator.click(&view, "preferences"));

  let target = requested.lock().unwrap().take().unwrap();
  let outcome = wizard.jump_to(&target).unwrap();

  assert!(matches!(outcome, Transition::Moved { ref to, .. } if to == "preferences"));
  assert_eq!(wizard.progress().status_of("review"), Some(StepStatus::Pending));
}
