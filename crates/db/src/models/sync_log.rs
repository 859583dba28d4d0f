//! Sync log entity and create DTO.
//!
//! The sync log is the append-only audit trail: one row per operation
//! outcome, immutable once written (no `updated_at`).

use serde::Serialize;
use sqlx::FromRow;

use futsync_core::types::{DbId, Timestamp};

/// A single audit row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SyncLog {
    pub id: DbId,
    pub logged_at: Timestamp,
    /// "Info" or "Error".
    pub level: String,
    /// Stable operation name, see `futsync_core::Operation::name`.
    pub operation: String,
    pub message: String,
    /// Serialized error detail, when the outcome was a failure.
    pub detail: Option<String>,
}

/// DTO for appending a new audit row. `logged_at` is set by the database.
#[derive(Debug, Clone)]
pub struct CreateSyncLog {
    pub level: String,
    pub operation: String,
    pub message: String,
    pub detail: Option<String>,
}
