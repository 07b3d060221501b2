// src/lib.rs

//! Waypoint: a type-safe, validation-gated multi-step wizard engine.
//!
//! A wizard walks a fixed catalog of steps, accumulating user input into one
//! aggregate record:
//!  - Forward navigation is gated by validating the current step's slice.
//!  - Backward navigation is free and never loses entered values.
//!  - Editing a field discards the owning step's earlier validation pass.
//!  - Commit re-validates the whole record, hands an immutable snapshot to an
//!    external submit handler, and assigns a booking reference.
//!  - Progress statuses (`completed` / `current` / `pending`) are derived, never stored.

pub mod catalog;
pub mod core;
pub mod error;
pub mod progress;
pub mod store;
pub mod wizard;

// --- Re-exports for the Public API ---

pub use crate::catalog::StepCatalog;
pub use crate::core::control::{Action, Transition};
pub use crate::core::record::Record;
pub use crate::core::step::{Step, StepStatus};
pub use crate::core::validation::{ValidationResult, Validator};
pub use crate::error::{ErrorKind, WizardError, WizardResult};
pub use crate::progress::{derive_statuses, NavigationCallback, ProgressIndicator, ProgressView, StepProgress};
pub use crate::store::RecordStore;
pub use crate::wizard::{BookingReference, Submission, SubmitHandler, Wizard, WizardState};

/*
        Typical host flow:
        1. Describe the record: implement `Record` (paths, values, per-step slices).
        2. Build a `StepCatalog` whose last entry is the terminal (confirmation) step.
        3. Create `Wizard::new(catalog, validator, Some(item))` and register `on_submit`.
        4. Route field edits to `set_field`, "Next"/"Previous" to `advance`/`retreat`,
              and "Confirm & Pay" to `commit`. Render `progress()` after every action.
        5. `Transition::Rejected` carries field errors to show inline; `Err` means the
              host asked for something the wizard must never do.
*/
