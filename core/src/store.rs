// waypoint/src/store.rs

//! Defines `RecordStore`, which owns the aggregate record and remembers which
//! steps have passed validation since their fields were last edited.

use crate::core::record::Record;
use crate::error::WizardResult;
use std::collections::BTreeSet;
use tracing::{event, Level};

/// Holds the aggregate record for one wizard session.
///
/// Reads hand out owned values (`get`, `slice`, `snapshot`), so nothing outside the
/// store can mutate the record except through `set`. Each `set` marks the owning
/// step dirty, discarding any validation pass recorded for it.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    record: R,
    passed: BTreeSet<String>,
}

impl<R: Record> RecordStore<R> {
    pub fn new(record: R) -> Self {
        Self {
            record,
            passed: BTreeSet::new(),
        }
    }

    pub fn get(&self, path: &R::Path) -> R::Value {
        self.record.get(path)
    }

    /// Writes a field and invalidates the owning step's validation pass.
    ///
    /// On failure the record is left untouched and the pass (if any) is kept.
    pub fn set(&mut self, path: &R::Path, value: R::Value) -> WizardResult<()> {
        self.record.set(path, value)?;
        let step_id = R::owning_step(path);
        if self.passed.remove(step_id) {
            event!(Level::DEBUG, %path, step_id, "Field edited; previous validation pass discarded.");
        } else {
            event!(Level::TRACE, %path, step_id, "Field edited.");
        }
        Ok(())
    }

    pub fn slice(&self, step_id: &str) -> Option<R::Slice> {
        self.record.slice(step_id)
    }

    /// A full, independent copy of the record.
    pub fn snapshot(&self) -> R {
        self.record.clone()
    }

    pub fn has_passed(&self, step_id: &str) -> bool {
        self.passed.contains(step_id)
    }

    /// `true` when the step's fields changed since its last successful validation
    /// (or it was never validated).
    pub fn is_dirty(&self, step_id: &str) -> bool {
        !self.has_passed(step_id)
    }

    pub(crate) fn mark_passed(&mut self, step_id: &str) {
        self.passed.insert(step_id.to_string());
    }

    pub(crate) fn mark_dirty(&mut self, step_id: &str) {
        self.passed.remove(step_id);
    }
}
