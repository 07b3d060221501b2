// waypoint/src/wizard/table.rs

//! The wizard's transition table: (current step, committed?, action) -> resolution.
//!
//! Resolution is pure. It decides *where* an action may lead and *which* validation
//! gate guards it; running the gate and mutating state is left to `transitions.rs`.
//! Backward moves resolve with `Gate::Open`, forward moves with a validation gate,
//! so "forward requires validation, backward is free" holds for every action.

use crate::catalog::StepCatalog;
use crate::core::control::Action;
use crate::error::WizardError;

/// Validation required before a move may happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gate {
    /// No validation (backward navigation).
    Open,
    /// The source step's slice must validate.
    StepSlice,
}

#[derive(Debug)]
pub(crate) enum Resolution {
    Move { to: usize, gate: Gate },
    /// Validate the whole record, then submit and enter the terminal step.
    Commit,
    Stay,
    Refuse(WizardError),
}

pub(crate) fn resolve(
    catalog: &StepCatalog,
    current: usize,
    committed_reference: Option<&str>,
    action: &Action,
) -> Resolution {
    if let Some(reference) = committed_reference {
        return Resolution::Refuse(WizardError::AlreadyCommitted {
            reference: reference.to_string(),
        });
    }

    let commit_index = catalog.commit_index();

    match action {
        Action::Advance if current == commit_index => Resolution::Commit,
        Action::Advance if current < commit_index => Resolution::Move {
            to: current + 1,
            gate: Gate::StepSlice,
        },
        // Only a commit can place an uncommitted wizard past the commit step.
        Action::Advance => Resolution::Refuse(WizardError::Internal(format!(
            "uncommitted wizard sits at ordinal {} beyond the commit step",
            current
        ))),

        Action::Retreat if current == 0 => Resolution::Stay,
        Action::Retreat => Resolution::Move {
            to: current - 1,
            gate: Gate::Open,
        },

        Action::JumpTo(target_id) => match catalog.index_of(target_id) {
            Err(e) => Resolution::Refuse(e),
            Ok(target) if target > current => Resolution::Refuse(WizardError::ForwardJump {
                from: step_id(catalog, current),
                to: target_id.clone(),
            }),
            Ok(target) if target == current => Resolution::Stay,
            Ok(target) => Resolution::Move {
                to: target,
                gate: Gate::Open,
            },
        },

        Action::Commit if current == commit_index => Resolution::Commit,
        Action::Commit => Resolution::Refuse(WizardError::CommitOutsideStep {
            current: step_id(catalog, current),
            commit_step: catalog.commit_step().id.clone(),
        }),
    }
}

fn step_id(catalog: &StepCatalog, ordinal: usize) -> String {
    catalog
        .step_at(ordinal)
        .map(|s| s.id.clone())
        .unwrap_or_else(|| format!("#{}", ordinal))
}
