// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use std::fmt;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc, Mutex,
};
use tracing::Level;
use waypoint::{StepCatalog, Submission, ValidationResult, Wizard, WizardError, WizardResult};

// --- A small sign-up record used to exercise the engine generically ---

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestField {
  Username,
  Email,
  Newsletter,
  AcceptTerms,
}

impl fmt::Display for TestField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      TestField::Username => "account.username",
      TestField::Email => "account.email",
      TestField::Newsletter => "preferences.newsletter",
      TestField::AcceptTerms => "review.acceptTerms",
    };
    f.write_str(name)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TestValue {
  Text(String),
  Flag(bool),
}

pub fn text(s: &str) -> TestValue {
  TestValue::Text(s.to_string())
}

#[derive(Clone, Debug, PartialEq)]
pub enum TestSlice {
  Account { username: String, email: String },
  Preferences { newsletter: bool },
  Review { accept_terms: bool },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TestRecord {
  pub username: String,
  pub email: String,
  pub newsletter: bool,
  pub accept_terms: bool,
}

impl waypoint::Record for TestRecord {
  type Path = TestField;
  type Value = TestValue;
  type Slice = TestSlice;

  fn get(&self, path: &TestField) -> TestValue {
    match path {
      TestField::Username => TestValue::Text(self.username.clone()),
      TestField::Email => TestValue::Text(self.email.clone()),
      TestField::Newsletter => TestValue::Flag(self.newsletter),
      TestField::AcceptTerms => TestValue::Flag(self.accept_terms),
    }
  }

  fn set(&mut self, path: &TestField, value: TestValue) -> WizardResult<()> {
    match (path, value) {
      (TestField::Username, TestValue::Text(v)) => self.username = v,
      (TestField::Email, TestValue::Text(v)) => self.email = v,
      (TestField::Newsletter, TestValue::Flag(v)) => self.newsletter = v,
      (TestField::AcceptTerms, TestValue::Flag(v)) => self.accept_terms = v,
      (path, value) => {
        return Err(WizardError::InvalidValue {
          path: path.to_string(),
          reason: format!("unexpected value {:?}", value),
        })
      }
    }
    Ok(())
  }

  fn owning_step(path: &TestField) -> &'static str {
    match path {
      TestField::Username | TestField::Email => "account",
      TestField::Newsletter => "preferences",
      TestField::AcceptTerms => "review",
    }
  }

  fn slice(&self, step_id: &str) -> Option<TestSlice> {
    match step_id {
      "account" => Some(TestSlice::Account {
        username: self.username.clone(),
        email: self.email.clone(),
      }),
      "preferences" => Some(TestSlice::Preferences {
        newsletter: self.newsletter,
      }),
      "review" => Some(TestSlice::Review {
        accept_terms: self.accept_terms,
      }),
      _ => None,
    }
  }
}

pub fn test_validator(_step_id: &str, slice: &TestSlice) -> ValidationResult<TestField> {
  let mut result = ValidationResult::ok();
  match slice {
    TestSlice::Account { username, email } => {
      if username.trim().len() < 3 {
        result.add(TestField::Username, "Username must be at least 3 characters");
      }
      if !email.contains('@') {
        result.add(TestField::Email, "Invalid email address");
      }
    }
    TestSlice::Preferences { .. } => {}
    TestSlice::Review { accept_terms } => {
      if !accept_terms {
        result.add(TestField::AcceptTerms, "You must accept the terms");
      }
    }
  }
  result
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestItem {
  pub name: String,
}

pub type TestWizard = Wizard<TestRecord, TestItem>;

pub fn test_catalog() -> StepCatalog {
  StepCatalog::new(&[
    ("account", "Account"),
    ("preferences", "Preferences"),
    ("review", "Review"),
    ("done", "Done"),
  ])
  .unwrap()
}

pub fn test_item() -> Arc<TestItem> {
  Arc::new(TestItem {
    name: "Premium plan".to_string(),
  })
}

pub fn new_wizard() -> TestWizard {
  Wizard::new(test_catalog(), test_validator, Some(test_item())).unwrap()
}

pub fn fill_account(wizard: &mut TestWizard) {
  wizard.set_field(&TestField::Username, text("ferris")).unwrap();
  wizard.set_field(&TestField::Email, text("ferris@example.com")).unwrap();
}

/// Drives a fresh wizard to the review step with a valid account.
pub async fn wizard_at_review() -> TestWizard {
  let mut wizard = new_wizard();
  fill_account(&mut wizard);
  wizard.advance().await.unwrap();
  wizard.advance().await.unwrap();
  assert_eq!(wizard.current_step_id(), "review");
  wizard
}

// --- Submit handler recording what it receives ---

pub type Received = Arc<Mutex<Vec<Submission<TestRecord, TestItem>>>>;

pub fn register_recording_handler(wizard: &mut TestWizard) -> Received {
  let received: Received = Arc::new(Mutex::new(Vec::new()));
  let sink = received.clone();
  wizard.on_submit(move |submission: Submission<TestRecord, TestItem>| {
    let sink = sink.clone();
    async move {
      SUBMIT_COUNTER.fetch_add(1, Ordering::SeqCst);
      sink.lock().unwrap().push(submission);
      Ok::<(), anyhow::Error>(())
    }
  });
  received
}

pub fn register_failing_handler(wizard: &mut TestWizard, message: &'static str) {
  wizard.on_submit(move |_submission: Submission<TestRecord, TestItem>| async move {
    SUBMIT_COUNTER.fetch_add(1, Ordering::SeqCst);
    Err::<(), _>(anyhow::anyhow!(message))
  });
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

// --- Atomic counter for checking submit invocations ---
pub static SUBMIT_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  SUBMIT_COUNTER.store(0, Ordering::SeqCst);
}

pub fn submit_count() -> usize {
  SUBMIT_COUNTER.load(Ordering::SeqCst)
}
