// waypoint/src/core/record.rs

//! Defines the `Record` trait: the shape of the aggregate record a wizard accumulates.

use crate::error::WizardResult;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The aggregate record a wizard fills in step by step.
///
/// Implementors describe a *closed* set of field paths (`Path`), the values those
/// paths hold (`Value`) and the per-step sub-shapes handed to the validator (`Slice`).
///
/// Every path is owned by exactly one step (`owning_step`). The record store uses this
/// to invalidate a step's previous validation pass whenever one of its fields changes.
pub trait Record: Clone + Send + Sync + 'static {
    /// A field address. Ordered so error maps render deterministically.
    type Path: Clone + Debug + Display + Eq + Ord + Hash + Send + Sync + 'static;

    /// A field value.
    type Value: Clone + Debug + PartialEq + Send + Sync + 'static;

    /// The sub-shape of the record relevant to a single step's validation.
    type Slice: Clone + Debug + Send + Sync + 'static;

    /// Reads the current value at `path`, or the field's default when it was never set.
    fn get(&self, path: &Self::Path) -> Self::Value;

    /// Writes `value` at `path`.
    ///
    /// Fails with `InvalidPath` for addresses that do not exist (e.g. an out-of-range
    /// list index) and `InvalidValue` when the value has the wrong type for the field.
    fn set(&mut self, path: &Self::Path, value: Self::Value) -> WizardResult<()>;

    /// The id of the step whose inputs own `path`.
    fn owning_step(path: &Self::Path) -> &'static str;

    /// An owned copy of the slice validated for `step_id`, or `None` if the step has no fields.
    fn slice(&self, step_id: &str) -> Option<Self::Slice>;
}
