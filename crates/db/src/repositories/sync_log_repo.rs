//! Repository for the `sync_logs` table.
//!
//! Append-only: there is deliberately no update or delete here.

use sqlx::PgExecutor;

use crate::models::sync_log::{CreateSyncLog, SyncLog};

/// Column list for `sync_logs` queries.
const COLUMNS: &str = "id, logged_at, level, operation, message, detail";

/// Provides append access to the audit trail.
pub struct SyncLogRepo;

impl SyncLogRepo {
    /// Append one audit row. The database sets `logged_at` to NOW().
    pub async fn append(
        executor: impl PgExecutor<'_>,
        entry: &CreateSyncLog,
    ) -> Result<SyncLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO sync_logs (level, operation, message, detail) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SyncLog>(&query)
            .bind(&entry.level)
            .bind(&entry.operation)
            .bind(&entry.message)
            .bind(&entry.detail)
            .fetch_one(executor)
            .await
    }
}
