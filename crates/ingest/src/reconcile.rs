//! Record reconciliation: decide insert-vs-update per incoming record,
//! then persist the whole batch in one transaction.
//!
//! Merge policy: a matched record always receives the full incoming
//! record's mutable fields.  A matched record whose incoming fields
//! equal the persisted row is skipped entirely, so replaying a batch
//! issues no writes at all.

use std::collections::HashMap;

use sqlx::PgPool;

use futsync_core::types::DbId;
use futsync_core::{LogLevel, Operation};
use futsync_db::models::league::LeagueUpsert;
use futsync_db::models::squad_player::SquadPlayerUpsert;
use futsync_db::repositories::{LeagueRepo, SquadPlayerRepo};

use crate::envelope::{DetailEnvelope, ListEnvelope};
use crate::{audit, IngestError};

/// Outcome of processing one response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The payload was reconciled and committed; an "Info" audit row
    /// was appended.
    Synced,
    /// The envelope held no data. Nothing was persisted and no audit
    /// row was written here -- the caller logs this case.
    NoData,
    /// Parsing or persistence failed. An "Error" audit row was
    /// appended; nothing was committed.
    Failed,
}

/// What one reconciliation run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileReport {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

/// Reconcile one response body against the store.
///
/// Catches every error at this boundary: failures become an "Error"
/// audit row plus a [`ProcessOutcome::Failed`], never a propagated
/// error.
pub async fn process(pool: &PgPool, operation: &Operation, body: &str) -> ProcessOutcome {
    match reconcile(pool, operation, body).await {
        Ok(report) => {
            tracing::info!(
                operation = operation.name(),
                inserted = report.inserted,
                updated = report.updated,
                unchanged = report.unchanged,
                "Reconciliation committed"
            );
            let message = format!(
                "Synchronized {} records ({} inserted, {} updated, {} unchanged)",
                report.inserted + report.updated + report.unchanged,
                report.inserted,
                report.updated,
                report.unchanged
            );
            if let Err(e) =
                audit::record(pool, LogLevel::Info, operation, &message, None).await
            {
                tracing::error!(
                    operation = operation.name(),
                    error = %e,
                    "Failed to append the success audit row"
                );
            }
            ProcessOutcome::Synced
        }
        Err(IngestError::NoData) => {
            tracing::warn!(
                operation = operation.name(),
                "No valid data found in the response"
            );
            ProcessOutcome::NoData
        }
        Err(e) => {
            tracing::error!(operation = operation.name(), error = %e, "Reconciliation failed");
            if let Err(log_err) = audit::record(
                pool,
                LogLevel::Error,
                operation,
                "An error occurred during processing",
                Some(e.to_string()),
            )
            .await
            {
                tracing::error!(
                    operation = operation.name(),
                    error = %log_err,
                    "Failed to append the error audit row"
                );
            }
            ProcessOutcome::Failed
        }
    }
}

async fn reconcile(
    pool: &PgPool,
    operation: &Operation,
    body: &str,
) -> Result<ReconcileReport, IngestError> {
    match operation {
        Operation::LeagueDetail { .. } => reconcile_league_detail(pool, body).await,
        Operation::Leagues => reconcile_leagues(pool, body).await,
        Operation::TeamSquad { .. } => reconcile_team_squad(pool, body).await,
    }
}

/// Single-entity path: one league, upserted by id.
async fn reconcile_league_detail(
    pool: &PgPool,
    body: &str,
) -> Result<ReconcileReport, IngestError> {
    let envelope: DetailEnvelope<LeagueUpsert> = serde_json::from_str(body)?;
    let incoming = envelope.data.ok_or(IngestError::NoData)?;

    let mut report = ReconcileReport::default();
    let mut tx = pool.begin().await?;

    match LeagueRepo::get_by_id(&mut *tx, incoming.id).await? {
        Some(existing) if LeagueUpsert::from(&existing) == incoming => {
            report.unchanged = 1;
        }
        Some(_) => {
            LeagueRepo::update(&mut *tx, &incoming).await?;
            report.updated = 1;
        }
        None => {
            LeagueRepo::insert(&mut *tx, &incoming).await?;
            report.inserted = 1;
        }
    }

    tx.commit().await?;
    Ok(report)
}

/// Multi-entity path for the leagues list.
async fn reconcile_leagues(pool: &PgPool, body: &str) -> Result<ReconcileReport, IngestError> {
    let envelope: ListEnvelope<LeagueUpsert> = serde_json::from_str(body)?;
    let incoming = envelope
        .data
        .filter(|records| !records.is_empty())
        .ok_or(IngestError::NoData)?;

    let ids: Vec<DbId> = incoming.iter().map(|record| record.id).collect();

    let mut tx = pool.begin().await?;
    let existing: HashMap<DbId, LeagueUpsert> = LeagueRepo::list_by_ids(&mut *tx, &ids)
        .await?
        .iter()
        .map(|row| (row.id, LeagueUpsert::from(row)))
        .collect();

    let split = partition(incoming, &existing, |record: &LeagueUpsert| record.id);

    LeagueRepo::insert_many(&mut *tx, &split.fresh).await?;
    for record in &split.changed {
        LeagueRepo::update(&mut *tx, record).await?;
    }
    tx.commit().await?;

    Ok(split.into_report())
}

/// Multi-entity path for a team's squad.
async fn reconcile_team_squad(pool: &PgPool, body: &str) -> Result<ReconcileReport, IngestError> {
    let envelope: ListEnvelope<SquadPlayerUpsert> = serde_json::from_str(body)?;
    let incoming = envelope
        .data
        .filter(|records| !records.is_empty())
        .ok_or(IngestError::NoData)?;

    let ids: Vec<DbId> = incoming.iter().map(|record| record.id).collect();

    let mut tx = pool.begin().await?;
    let existing: HashMap<DbId, SquadPlayerUpsert> = SquadPlayerRepo::list_by_ids(&mut *tx, &ids)
        .await?
        .iter()
        .map(|row| (row.id, SquadPlayerUpsert::from(row)))
        .collect();

    let split = partition(incoming, &existing, |record: &SquadPlayerUpsert| record.id);

    SquadPlayerRepo::insert_many(&mut *tx, &split.fresh).await?;
    for record in &split.changed {
        SquadPlayerRepo::update(&mut *tx, record).await?;
    }
    tx.commit().await?;

    Ok(split.into_report())
}

/// Incoming records split by what the store already holds.
struct Partition<R> {
    /// No row with this id exists yet -- to be bulk-inserted.
    fresh: Vec<R>,
    /// A row exists and at least one field differs -- to be updated.
    changed: Vec<R>,
    /// A row exists and is identical -- nothing to do.
    unchanged: usize,
}

impl<R> Partition<R> {
    fn into_report(self) -> ReconcileReport {
        ReconcileReport {
            inserted: self.fresh.len(),
            updated: self.changed.len(),
            unchanged: self.unchanged,
        }
    }
}

/// Split an incoming batch against the currently persisted records.
fn partition<R, F>(incoming: Vec<R>, existing: &HashMap<DbId, R>, id_of: F) -> Partition<R>
where
    R: PartialEq,
    F: Fn(&R) -> DbId,
{
    let mut fresh = Vec::new();
    let mut changed = Vec::new();
    let mut unchanged = 0;

    for record in incoming {
        match existing.get(&id_of(&record)) {
            Some(current) if *current == record => unchanged += 1,
            Some(_) => changed.push(record),
            None => fresh.push(record),
        }
    }

    Partition {
        fresh,
        changed,
        unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Record {
        id: DbId,
        value: &'static str,
    }

    fn record(id: DbId, value: &'static str) -> Record {
        Record { id, value }
    }

    #[test]
    fn unknown_ids_land_in_the_fresh_bucket() {
        let existing = HashMap::new();
        let split = partition(vec![record(1, "a"), record(2, "b")], &existing, |r| r.id);

        assert_eq!(split.fresh.len(), 2);
        assert!(split.changed.is_empty());
        assert_eq!(split.unchanged, 0);
    }

    #[test]
    fn differing_matches_are_staged_as_changes() {
        let existing = HashMap::from([(1, record(1, "old"))]);
        let split = partition(vec![record(1, "new"), record(2, "b")], &existing, |r| r.id);

        assert_eq!(split.fresh, vec![record(2, "b")]);
        assert_eq!(split.changed, vec![record(1, "new")]);
        assert_eq!(split.unchanged, 0);
    }

    #[test]
    fn identical_matches_are_skipped() {
        let existing = HashMap::from([(1, record(1, "same")), (2, record(2, "same"))]);
        let split = partition(
            vec![record(1, "same"), record(2, "same")],
            &existing,
            |r| r.id,
        );

        assert!(split.fresh.is_empty());
        assert!(split.changed.is_empty());
        assert_eq!(split.unchanged, 2);
    }

    #[test]
    fn report_counts_mirror_the_buckets() {
        let existing = HashMap::from([(1, record(1, "old")), (3, record(3, "same"))]);
        let split = partition(
            vec![record(1, "new"), record(2, "b"), record(3, "same")],
            &existing,
            |r| r.id,
        );

        let report = split.into_report();
        assert_eq!(
            report,
            ReconcileReport {
                inserted: 1,
                updated: 1,
                unchanged: 1,
            }
        );
    }
}
