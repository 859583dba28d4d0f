//! Audit-trail writes.
//!
//! Each row is appended immediately with its own insert -- audit
//! writes are rare compared to record-sync writes, so there is no
//! batching here.

use sqlx::PgPool;

use futsync_core::{LogLevel, Operation};
use futsync_db::models::sync_log::{CreateSyncLog, SyncLog};
use futsync_db::repositories::SyncLogRepo;

/// Append one audit row describing an operation outcome.
pub async fn record(
    pool: &PgPool,
    level: LogLevel,
    operation: &Operation,
    message: &str,
    detail: Option<String>,
) -> Result<SyncLog, sqlx::Error> {
    SyncLogRepo::append(
        pool,
        &CreateSyncLog {
            level: level.as_str().to_string(),
            operation: operation.name().to_string(),
            message: message.to_string(),
            detail,
        },
    )
    .await
}
