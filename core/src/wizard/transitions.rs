// waypoint/src/wizard/transitions.rs

//! Contains the transition methods of `Wizard<R, C>`: advance, retreat, jump-to and commit.
//!
//! Every method first asks the transition table where the action leads, then runs the
//! gate the table chose, and only then touches state. A rejected or refused action
//! leaves the wizard exactly as it was.

use crate::core::control::{Action, Transition};
use crate::core::record::Record;
use crate::core::validation::ValidationResult;
use crate::error::{WizardError, WizardResult};
use crate::wizard::definition::Wizard;
use crate::wizard::submit::{BookingReference, Submission};
use crate::wizard::table::{self, Gate, Resolution};
use tracing::{event, instrument, Level};

type Outcome<R> = WizardResult<Transition<<R as Record>::Path>>;

impl<R, C> Wizard<R, C>
where
    R: Record,
    C: Send + Sync + 'static,
{
    /// Applies any [`Action`]. Equivalent to calling the dedicated method.
    pub async fn apply(&mut self, action: Action) -> Outcome<R> {
        match action {
            Action::Advance => self.advance().await,
            Action::Retreat => self.retreat(),
            Action::JumpTo(step_id) => self.jump_to(&step_id),
            Action::Commit => self.commit().await,
        }
    }

    /// "Next". Validates the current step's slice and moves forward on success.
    ///
    /// On the last editable step this is a commit: the whole record is validated and
    /// the submit handler runs before the terminal step is entered.
    #[instrument(name = "Wizard::advance", skip_all, fields(step = %self.current_step_id()))]
    pub async fn advance(&mut self) -> Outcome<R> {
        let resolution = self.resolve(&Action::Advance);
        self.execute(resolution).await
    }

    /// "Previous". Always allowed (no validation); a no-op on the first step.
    #[instrument(name = "Wizard::retreat", skip_all, fields(step = %self.current_step_id()))]
    pub fn retreat(&mut self) -> Outcome<R> {
        let resolution = self.resolve(&Action::Retreat);
        self.execute_navigation(resolution)
    }

    /// Navigates back to an already visited step. Forward jumps are refused.
    #[instrument(name = "Wizard::jump_to", skip(self), fields(step = %self.current_step_id()))]
    pub fn jump_to(&mut self, target_step_id: &str) -> Outcome<R> {
        let resolution = self.resolve(&Action::JumpTo(target_step_id.to_string()));
        self.execute_navigation(resolution)
    }

    /// "Confirm & Pay". Only allowed on the last editable step.
    #[instrument(name = "Wizard::commit", skip_all, fields(step = %self.current_step_id()))]
    pub async fn commit(&mut self) -> Outcome<R> {
        let resolution = self.resolve(&Action::Commit);
        self.execute(resolution).await
    }

    /// Validates the current step's slice without moving. Records a pass on success.
    pub fn validate_current(&mut self) -> ValidationResult<R::Path> {
        self.validate_step(self.current)
    }

    /// Validates every editable step's slice and merges the results.
    pub fn validate_record(&mut self) -> ValidationResult<R::Path> {
        let mut merged = ValidationResult::ok();
        for ordinal in 0..self.catalog.terminal_index() {
            merged.merge(self.validate_step(ordinal));
        }
        merged
    }

    // --- Internals ---

    fn resolve(&self, action: &Action) -> Resolution {
        let committed = self.booking_reference.as_ref().map(BookingReference::as_str);
        table::resolve(&self.catalog, self.current, committed, action)
    }

    async fn execute(&mut self, resolution: Resolution) -> Outcome<R> {
        match resolution {
            Resolution::Commit => self.run_commit().await,
            other => self.execute_navigation(other),
        }
    }

    fn execute_navigation(&mut self, resolution: Resolution) -> Outcome<R> {
        match resolution {
            Resolution::Move { to, gate } => {
                if gate == Gate::StepSlice {
                    let result = self.validate_step(self.current);
                    if !result.is_ok() {
                        return Ok(self.rejected(result));
                    }
                }
                self.move_to(to)
            }
            Resolution::Stay => {
                event!(Level::DEBUG, "Action resolved to no-op.");
                Ok(Transition::Unchanged)
            }
            Resolution::Refuse(err) => {
                event!(Level::WARN, error = %err, "Action refused.");
                Err(err)
            }
            Resolution::Commit => Err(WizardError::Internal(
                "commit resolution reached the navigation path".to_string(),
            )),
        }
    }

    fn validate_step(&mut self, ordinal: usize) -> ValidationResult<R::Path> {
        let step_id = self.catalog.steps()[ordinal].id.clone();
        let result = match self.store.slice(&step_id) {
            Some(slice) => self.validator.validate(&step_id, &slice),
            None => ValidationResult::ok(),
        };
        if result.is_ok() {
            self.store.mark_passed(&step_id);
        } else {
            self.store.mark_dirty(&step_id);
        }
        event!(Level::DEBUG, step_id = %step_id, ok = result.is_ok(), num_errors = result.len(), "Step validated.");
        result
    }

    fn move_to(&mut self, to: usize) -> Outcome<R> {
        let from_step = self.current_step_id().to_string();
        // Forward progress is only ever legal past a step holding a fresh validation pass.
        if to > self.current && !self.store.has_passed(&from_step) {
            return Err(WizardError::Internal(format!(
                "refusing to move past step '{}' without a validation pass",
                from_step
            )));
        }
        self.current = to;
        let to_step = self.current_step_id().to_string();
        event!(Level::INFO, from = %from_step, to = %to_step, "Wizard moved.");
        Ok(Transition::Moved {
            from: from_step,
            to: to_step,
        })
    }

    fn rejected(&self, errors: ValidationResult<R::Path>) -> Transition<R::Path> {
        event!(Level::INFO, num_errors = errors.len(), "Transition rejected by validation.");
        Transition::Rejected {
            step: self.current_step_id().to_string(),
            errors,
        }
    }

    async fn run_commit(&mut self) -> Outcome<R> {
        let commit_step_id = self.current_step_id().to_string();
        let handler = self.submit_handler.clone().ok_or_else(|| {
            event!(Level::ERROR, "Commit attempted with no submit handler registered.");
            WizardError::HandlerMissing {
                step_id: commit_step_id.clone(),
            }
        })?;

        // Earlier steps may have been edited after they were passed; check everything.
        let result = self.validate_record();
        if !result.is_ok() {
            return Ok(self.rejected(result));
        }

        let reference = BookingReference::generate(&self.reference_prefix);
        let submission = Submission {
            record: self.store.snapshot(),
            item: self.item.clone(),
            booking_reference: reference.clone(),
        };

        event!(Level::DEBUG, reference = %reference, "Invoking submit handler.");
        if let Err(source) = handler.submit(submission).await {
            event!(Level::ERROR, reference = %reference, error = %source, "Submit handler failed; commit abandoned.");
            return Err(WizardError::SubmitFailed {
                reference: reference.to_string(),
                source,
            });
        }

        self.current = self.catalog.terminal_index();
        self.booking_reference = Some(reference.clone());
        let terminal_id = self.current_step_id().to_string();
        event!(Level::INFO, reference = %reference, step = %terminal_id, "Booking committed.");
        Ok(Transition::Committed {
            reference,
            step: terminal_id,
        })
    }
}
