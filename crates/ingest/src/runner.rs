//! The fetch → reconcile → audit flow for one operation.

use sqlx::PgPool;

use futsync_core::{LogLevel, Operation};
use futsync_sportmonks::SportmonksClient;

use crate::audit;
use crate::reconcile::{process, ProcessOutcome};

/// Run one operation to completion.
///
/// Returns `true` when the payload was reconciled and committed.
/// Every failure mode -- transport error, empty body, missing data,
/// parse or persistence error -- ends up as exactly one "Error" audit
/// row and a `false` return; nothing propagates to the caller.
pub async fn run(client: &SportmonksClient, pool: &PgPool, operation: &Operation) -> bool {
    let body = match client.fetch(operation).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(operation = operation.name(), error = %e, "Fetch failed");
            append_error(pool, operation, &e.to_string(), Some(format!("{e:?}"))).await;
            return false;
        }
    };

    match process(pool, operation, &body).await {
        ProcessOutcome::Synced => true,
        ProcessOutcome::NoData => {
            // The reconciler wrote nothing for this case; the audit row
            // is appended here so the outcome is recorded exactly once.
            append_error(pool, operation, "The data was invalid or not found", None).await;
            false
        }
        // The reconciler already appended its own error row.
        ProcessOutcome::Failed => false,
    }
}

async fn append_error(pool: &PgPool, operation: &Operation, message: &str, detail: Option<String>) {
    if let Err(e) = audit::record(pool, LogLevel::Error, operation, message, detail).await {
        tracing::error!(
            operation = operation.name(),
            error = %e,
            "Failed to append the error audit row"
        );
    }
}
