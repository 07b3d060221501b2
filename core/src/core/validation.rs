// waypoint/src/core/validation.rs

//! The validation engine contract consumed by the wizard controller.

use crate::core::record::Record;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field-level outcome of validating a slice.
///
/// A result is `ok` exactly when it carries no errors. Only the first message
/// recorded for a field is kept, so the most basic failure is the one displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult<K: Ord> {
    ok: bool,
    errors: BTreeMap<K, String>,
}

impl<K: Ord> ValidationResult<K> {
    pub fn ok() -> Self {
        Self {
            ok: true,
            errors: BTreeMap::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn add(&mut self, field: K, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
        self.ok = false;
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with_error(mut self, field: K, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Folds `other` into `self`, keeping existing messages on conflict.
    pub fn merge(&mut self, other: ValidationResult<K>) {
        for (field, message) in other.errors {
            self.add(field, message);
        }
    }

    pub fn error_for(&self, field: &K) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<K, String> {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> BTreeMap<K, String> {
        self.errors
    }
}

impl<K: Ord> Default for ValidationResult<K> {
    fn default() -> Self {
        Self::ok()
    }
}

/// Checks one step's slice against that step's schema.
///
/// Implementations must be pure: no retained state and no side effects. The wizard
/// calls `validate` on every advance and commit attempt and never reuses an older result.
pub trait Validator<R: Record>: Send + Sync {
    fn validate(&self, step_id: &str, slice: &R::Slice) -> ValidationResult<R::Path>;
}

impl<R, F> Validator<R> for F
where
    R: Record,
    F: Fn(&str, &R::Slice) -> ValidationResult<R::Path> + Send + Sync,
{
    fn validate(&self, step_id: &str, slice: &R::Slice) -> ValidationResult<R::Path> {
        (self)(step_id, slice)
    }
}
