// waypoint/src/wizard/mod.rs

//! Defines the `Wizard<R, C>` controller: construction, transitions and commit.

pub mod definition;
pub mod submit;
pub(crate) mod table;
pub mod transitions;

pub use definition::{Wizard, WizardState};
pub use submit::{BookingReference, Submission, SubmitHandler};
