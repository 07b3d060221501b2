// waypoint/src/wizard/submit.rs

//! The external submit handler contract and the data it receives on commit.

use crate::core::record::Record;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use uuid::Uuid;

pub const DEFAULT_REFERENCE_PREFIX: &str = "BK";

/// Identifier assigned to a booking when its wizard commits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    /// A fresh reference of the form `<PREFIX>-<32 upper-case hex digits>`.
    pub fn generate(prefix: &str) -> Self {
        let id = Uuid::new_v4().simple().to_string().to_uppercase();
        BookingReference(format!("{}-{}", prefix, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the submit handler receives on a successful commit.
///
/// `record` is a snapshot: changing it cannot affect the wizard.
#[derive(Debug, Clone)]
pub struct Submission<R, C> {
    pub record: R,
    pub item: Arc<C>,
    pub booking_reference: BookingReference,
}

/// Receives the finalized record. Persistence and user notification live here,
/// outside the wizard.
///
/// The wizard calls `submit` at most once per successful commit. If it returns an
/// error the commit is abandoned: no reference is kept and the current step does not change.
#[async_trait]
pub trait SubmitHandler<R, C>: Send + Sync
where
    R: Record,
    C: Send + Sync + 'static,
{
    async fn submit(&self, submission: Submission<R, C>) -> anyhow::Result<()>;
}

#[async_trait]
impl<R, C, F, Fut> SubmitHandler<R, C> for F
where
    R: Record,
    C: Send + Sync + 'static,
    F: Fn(Submission<R, C>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn submit(&self, submission: Submission<R, C>) -> anyhow::Result<()> {
        (self)(submission).await
    }
}
