// waypoint/src/core/step.rs

//! Defines a single wizard step and its derived display status.

use serde::{Deserialize, Serialize};

/// One named stage in a wizard's fixed sequence.
///
/// Steps are created once, when the [`StepCatalog`](crate::StepCatalog) is built,
/// and the `ordinal` always equals the step's position in that catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub display_name: String,
    pub ordinal: usize,
}

/// Display status of a step relative to the wizard's current step.
///
/// Never stored; always computed from ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// The step lies behind the current step.
    Completed,
    /// The step is the one being edited.
    Current,
    /// The step has not been reached yet.
    Pending,
}

impl StepStatus {
    pub fn for_ordinals(step_ordinal: usize, current_ordinal: usize) -> Self {
        match step_ordinal.cmp(&current_ordinal) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Pending => "pending",
        }
    }
}
