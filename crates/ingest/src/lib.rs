//! Reconciliation of upstream payloads into the local store.
//!
//! The flow for one operation is fetch → reconcile → audit, strictly
//! sequential.  [`runner::run`] drives the whole flow;
//! [`reconcile::process`] handles a body that has already been
//! fetched.  Every failure is converted into an "Error" audit row at
//! this boundary -- nothing propagates to the menu loop.

pub mod audit;
pub mod envelope;
pub mod reconcile;
pub mod runner;

pub use reconcile::{process, ProcessOutcome};
pub use runner::run;

/// Errors arising while reconciling one response body.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The body was not valid JSON for the expected envelope.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The envelope parsed but its `data` field was null or empty.
    #[error("response contained no data")]
    NoData,

    /// A persistence call failed.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}
