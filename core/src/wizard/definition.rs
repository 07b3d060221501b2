// waypoint/src/wizard/definition.rs

//! Contains the `Wizard<R, C>` struct, its construction, and the read/write surface
//! hosts use between transitions.

use crate::catalog::StepCatalog;
use crate::core::record::Record;
use crate::core::step::Step;
use crate::core::validation::Validator;
use crate::error::{WizardError, WizardResult};
use crate::progress::{self, ProgressView};
use crate::store::RecordStore;
use crate::wizard::submit::{BookingReference, SubmitHandler, DEFAULT_REFERENCE_PREFIX};
use serde::Serialize;
use std::sync::Arc;
use tracing::{event, Level};

/// A multi-step wizard session over a record `R`, booked against an item context `C`.
///
/// The wizard owns its record store exclusively. All transitions take `&mut self`, so
/// two transitions can never be in flight at once for the same session.
pub struct Wizard<R, C>
where
    R: Record,
    C: Send + Sync + 'static,
{
    pub(crate) catalog: StepCatalog,
    pub(crate) store: RecordStore<R>,
    pub(crate) validator: Arc<dyn Validator<R>>,
    pub(crate) submit_handler: Option<Arc<dyn SubmitHandler<R, C>>>,
    pub(crate) item: Arc<C>,
    /// Ordinal of the current step in `catalog`.
    pub(crate) current: usize,
    pub(crate) booking_reference: Option<BookingReference>,
    pub(crate) reference_prefix: String,
}

/// Point-in-time view of a wizard session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState<R> {
    pub current_step_id: String,
    pub record: R,
    pub booking_reference: Option<BookingReference>,
}

impl<R, C> Wizard<R, C>
where
    R: Record,
    C: Send + Sync + 'static,
{
    /// Creates a wizard positioned on the catalog's first step with a default record.
    ///
    /// Fails with `MissingItemContext` when `item` is `None`: a booking must never
    /// start without knowing what is being booked.
    pub fn new<V>(catalog: StepCatalog, validator: V, item: Option<Arc<C>>) -> WizardResult<Self>
    where
        R: Default,
        V: Validator<R> + 'static,
    {
        Self::with_record(catalog, R::default(), validator, item)
    }

    /// Like [`new`](Self::new), starting from a pre-filled record.
    pub fn with_record<V>(catalog: StepCatalog, record: R, validator: V, item: Option<Arc<C>>) -> WizardResult<Self>
    where
        V: Validator<R> + 'static,
    {
        let item = item.ok_or_else(|| {
            event!(Level::WARN, "Refusing to start wizard: no item context supplied.");
            WizardError::MissingItemContext
        })?;

        event!(
            Level::DEBUG,
            record_type = %std::any::type_name::<R>(),
            num_steps = catalog.len(),
            first_step = %catalog.first().id,
            "Wizard initialized."
        );

        Ok(Self {
            catalog,
            store: RecordStore::new(record),
            validator: Arc::new(validator),
            submit_handler: None,
            item,
            current: 0,
            booking_reference: None,
            reference_prefix: DEFAULT_REFERENCE_PREFIX.to_string(),
        })
    }

    /// Registers the handler invoked with the finalized record on commit.
    /// A later registration replaces an earlier one.
    pub fn on_submit<H>(&mut self, handler: H)
    where
        H: SubmitHandler<R, C> + 'static,
    {
        self.submit_handler = Some(Arc::new(handler));
    }

    /// Sets the prefix used for booking references generated on commit.
    pub fn set_reference_prefix(&mut self, prefix: impl Into<String>) {
        self.reference_prefix = prefix.into();
    }

    // --- Reads ---

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn current_step(&self) -> &Step {
        &self.catalog.steps()[self.current]
    }

    pub fn current_step_id(&self) -> &str {
        &self.current_step().id
    }

    pub fn item(&self) -> &C {
        &self.item
    }

    pub fn booking_reference(&self) -> Option<&BookingReference> {
        self.booking_reference.as_ref()
    }

    pub fn is_committed(&self) -> bool {
        self.booking_reference.is_some()
    }

    pub fn get(&self, path: &R::Path) -> R::Value {
        self.store.get(path)
    }

    pub fn snapshot(&self) -> R {
        self.store.snapshot()
    }

    /// Whether `step_id` needs validating before the wizard may move past it.
    pub fn is_dirty(&self, step_id: &str) -> WizardResult<bool> {
        self.catalog.get(step_id)?;
        Ok(self.store.is_dirty(step_id))
    }

    pub fn progress(&self) -> ProgressView {
        progress::statuses_at(&self.catalog, self.current)
    }

    pub fn state(&self) -> WizardState<R> {
        WizardState {
            current_step_id: self.current_step_id().to_string(),
            record: self.store.snapshot(),
            booking_reference: self.booking_reference.clone(),
        }
    }

    // --- Writes ---

    /// Writes a single field. Values persist across navigation in both directions.
    ///
    /// Refused once the wizard has committed: the submitted snapshot is final.
    pub fn set_field(&mut self, path: &R::Path, value: R::Value) -> WizardResult<()> {
        if let Some(reference) = &self.booking_reference {
            return Err(WizardError::AlreadyCommitted {
                reference: reference.to_string(),
            });
        }
        self.store.set(path, value)
    }
}

impl<R, C> std::fmt::Debug for Wizard<R, C>
where
    R: Record,
    C: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("current_step", &self.current_step().id)
            .field("num_steps", &self.catalog.len())
            .field("booking_reference", &self.booking_reference)
            .field("submit_handler_present", &self.submit_handler.is_some())
            .finish()
    }
}
