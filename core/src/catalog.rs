// waypoint/src/catalog.rs

//! Defines `StepCatalog`, the fixed, ordered sequence of steps a wizard walks through.

use crate::core::step::Step;
use crate::error::{WizardError, WizardResult};
use std::collections::HashSet;

/// Read-only ordered list of steps.
///
/// The last step is the *terminal* step, reachable only by committing. The step right
/// before it is the *commit step*: the last one with editable fields. A catalog therefore
/// needs at least two steps.
///
/// Lookups by an id that is not in the catalog fail with `UnknownStep`. That is a wiring
/// mistake in the host, not something a user can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCatalog {
    steps: Vec<Step>,
}

impl StepCatalog {
    /// Builds a catalog from `(id, display_name)` pairs. Ordinals follow slice order.
    pub fn new(step_defs: &[(&str, &str)]) -> WizardResult<Self> {
        if step_defs.len() < 2 {
            return Err(WizardError::InvalidCatalog {
                message: format!(
                    "a catalog needs at least one editable step and a terminal step, got {} step(s)",
                    step_defs.len()
                ),
            });
        }

        let mut seen = HashSet::new();
        let mut steps = Vec::with_capacity(step_defs.len());
        for (ordinal, (id, display_name)) in step_defs.iter().enumerate() {
            if id.is_empty() {
                return Err(WizardError::InvalidCatalog {
                    message: format!("step at position {} has an empty id", ordinal),
                });
            }
            if !seen.insert(*id) {
                return Err(WizardError::InvalidCatalog {
                    message: format!("duplicate step id '{}'", id),
                });
            }
            steps.push(Step {
                id: (*id).to_string(),
                display_name: (*display_name).to_string(),
                ordinal,
            });
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, step_id: &str) -> WizardResult<&Step> {
        self
            .steps
            .iter()
            .find(|s| s.id == step_id)
            .ok_or_else(|| WizardError::unknown_step(step_id))
    }

    pub fn step_at(&self, ordinal: usize) -> Option<&Step> {
        self.steps.get(ordinal)
    }

    pub fn index_of(&self, step_id: &str) -> WizardResult<usize> {
        self.get(step_id).map(|s| s.ordinal)
    }

    pub fn next(&self, step_id: &str) -> WizardResult<Option<&Step>> {
        let idx = self.index_of(step_id)?;
        Ok(self.steps.get(idx + 1))
    }

    pub fn previous(&self, step_id: &str) -> WizardResult<Option<&Step>> {
        let idx = self.index_of(step_id)?;
        Ok(idx.checked_sub(1).and_then(|prev| self.steps.get(prev)))
    }

    pub fn is_first(&self, step_id: &str) -> WizardResult<bool> {
        Ok(self.index_of(step_id)? == 0)
    }

    pub fn is_terminal(&self, step_id: &str) -> WizardResult<bool> {
        Ok(self.index_of(step_id)? == self.terminal_index())
    }

    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    pub fn terminal(&self) -> &Step {
        &self.steps[self.terminal_index()]
    }

    /// The last editable step, from which commit is allowed.
    pub fn commit_step(&self) -> &Step {
        &self.steps[self.commit_index()]
    }

    /// Every step before the terminal one, in order.
    pub fn editable_steps(&self) -> &[Step] {
        &self.steps[..self.terminal_index()]
    }

    pub(crate) fn terminal_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub(crate) fn commit_index(&self) -> usize {
        self.steps.len() - 2
    }
}
