pub mod control;
pub mod record;
pub mod step;
pub mod validation;

// Re-export key types for easier access from other waypoint modules (and lib.rs)
pub use control::{Action, Transition};
pub use record::Record;
pub use step::{Step, StepStatus};
pub use validation::{ValidationResult, Validator};
