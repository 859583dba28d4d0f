//! Repository for the `squad_players` table.

use sqlx::{PgExecutor, QueryBuilder};

use futsync_core::types::DbId;

use crate::models::squad_player::{SquadPlayer, SquadPlayerUpsert};

/// Column list for `squad_players` queries.
const COLUMNS: &str = "\
    id, transfer_id, player_id, team_id, position_id, detailed_position_id, \
    start_date, end_date, captain, jersey_number, created_at, updated_at";

/// Provides query operations for squad memberships.
pub struct SquadPlayerRepo;

impl SquadPlayerRepo {
    /// Fetch every squad player whose id is in the given set.
    pub async fn list_by_ids(
        executor: impl PgExecutor<'_>,
        ids: &[DbId],
    ) -> Result<Vec<SquadPlayer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM squad_players WHERE id = ANY($1)");
        sqlx::query_as::<_, SquadPlayer>(&query)
            .bind(ids)
            .fetch_all(executor)
            .await
    }

    /// List all squad players, ordered by id.
    pub async fn list_all(executor: impl PgExecutor<'_>) -> Result<Vec<SquadPlayer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM squad_players ORDER BY id");
        sqlx::query_as::<_, SquadPlayer>(&query)
            .fetch_all(executor)
            .await
    }

    /// Bulk-insert squad players in one multi-row INSERT statement.
    ///
    /// A no-op for an empty slice. Returns the number of inserted rows.
    pub async fn insert_many(
        executor: impl PgExecutor<'_>,
        records: &[SquadPlayerUpsert],
    ) -> Result<u64, sqlx::Error> {
        if records.is_empty() {
            return Ok(0);
        }
        let mut builder = QueryBuilder::new(
            "INSERT INTO squad_players (id, transfer_id, player_id, team_id, position_id, \
             detailed_position_id, start_date, end_date, captain, jersey_number) ",
        );
        builder.push_values(records, |mut row, record| {
            row.push_bind(record.id)
                .push_bind(record.transfer_id)
                .push_bind(record.player_id)
                .push_bind(record.team_id)
                .push_bind(record.position_id)
                .push_bind(record.detailed_position_id)
                .push_bind(&record.start_date)
                .push_bind(&record.end_date)
                .push_bind(record.captain)
                .push_bind(record.jersey_number);
        });
        let result = builder.build().execute(executor).await?;
        Ok(result.rows_affected())
    }

    /// Overwrite the mutable fields of an existing squad player in place.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        record: &SquadPlayerUpsert,
    ) -> Result<SquadPlayer, sqlx::Error> {
        let query = format!(
            "UPDATE squad_players \
             SET transfer_id = $2, player_id = $3, team_id = $4, position_id = $5, \
                 detailed_position_id = $6, start_date = $7, end_date = $8, captain = $9, \
                 jersey_number = $10, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SquadPlayer>(&query)
            .bind(record.id)
            .bind(record.transfer_id)
            .bind(record.player_id)
            .bind(record.team_id)
            .bind(record.position_id)
            .bind(record.detailed_position_id)
            .bind(&record.start_date)
            .bind(&record.end_date)
            .bind(record.captain)
            .bind(record.jersey_number)
            .fetch_one(executor)
            .await
    }
}
