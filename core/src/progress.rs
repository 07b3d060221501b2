// waypoint/src/progress.rs

//! Progress indicator support: per-step statuses derived from the current step.

use crate::catalog::StepCatalog;
use crate::core::step::{Step, StepStatus};
use crate::error::WizardResult;
use serde::Serialize;
use tracing::{event, Level};

/// A step paired with its derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: Step,
    pub status: StepStatus,
}

/// Statuses for every step of a catalog, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    entries: Vec<StepProgress>,
}

impl ProgressView {
    pub fn entries(&self) -> &[StepProgress] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepProgress> {
        self.entries.iter()
    }

    pub fn status_of(&self, step_id: &str) -> Option<StepStatus> {
        self.entries.iter().find(|e| e.step.id == step_id).map(|e| e.status)
    }

    pub fn current(&self) -> Option<&Step> {
        self
            .entries
            .iter()
            .find(|e| e.status == StepStatus::Current)
            .map(|e| &e.step)
    }
}

/// Derives every step's status from `current_step_id`.
///
/// `Completed` before the current step, `Current` on it, `Pending` after it.
pub fn derive_statuses(catalog: &StepCatalog, current_step_id: &str) -> WizardResult<ProgressView> {
    let current = catalog.index_of(current_step_id)?;
    Ok(statuses_at(catalog, current))
}

pub(crate) fn statuses_at(catalog: &StepCatalog, current: usize) -> ProgressView {
    let entries = catalog
        .steps()
        .iter()
        .map(|step| StepProgress {
            step: step.clone(),
            status: StepStatus::for_ordinals(step.ordinal, current),
        })
        .collect();
    ProgressView { entries }
}

/// Invoked with the id of a completed step the user asked to return to.
pub type NavigationCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Stateless progress indicator.
///
/// Rendering is a pure derivation. The optional callback is how a host lets users
/// click back to completed steps; it is typically wired to `Wizard::jump_to`.
#[derive(Default)]
pub struct ProgressIndicator {
    on_step_click: Option<NavigationCallback>,
}

impl ProgressIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_step_click(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            on_step_click: Some(Box::new(callback)),
        }
    }

    pub fn render(&self, catalog: &StepCatalog, current_step_id: &str) -> WizardResult<ProgressView> {
        derive_statuses(catalog, current_step_id)
    }

    /// Only completed steps are clickable, and only when a callback is wired.
    pub fn is_clickable(&self, status: StepStatus) -> bool {
        self.on_step_click.is_some() && status == StepStatus::Completed
    }

    /// Handles a click on `step_id`. Returns whether the navigation callback fired.
    pub fn click(&self, view: &ProgressView, step_id: &str) -> bool {
        let status = match view.status_of(step_id) {
            Some(status) => status,
            None => {
                event!(Level::WARN, step_id, "Click on a step that is not in the progress view.");
                return false;
            }
        };
        match &self.on_step_click {
            Some(callback) if status == StepStatus::Completed => {
                event!(Level::DEBUG, step_id, "Progress indicator requested navigation.");
                callback(step_id);
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Debug for ProgressIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressIndicator")
            .field("on_step_click_present", &self.on_step_click.is_some())
            .finish()
    }
}
