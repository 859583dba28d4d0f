//! Repository for the `leagues` table.

use sqlx::{PgExecutor, QueryBuilder};

use futsync_core::types::DbId;

use crate::models::league::{League, LeagueUpsert};

/// Column list for `leagues` queries.
const COLUMNS: &str = "\
    id, sport_id, country_id, name, active, short_code, image_path, \
    league_type, sub_type, last_played_at, category, has_jerseys, \
    created_at, updated_at";

/// Provides query operations for leagues.
pub struct LeagueRepo;

impl LeagueRepo {
    /// Fetch one league by its upstream id.
    pub async fn get_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<League>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leagues WHERE id = $1");
        sqlx::query_as::<_, League>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Fetch every league whose id is in the given set.
    pub async fn list_by_ids(
        executor: impl PgExecutor<'_>,
        ids: &[DbId],
    ) -> Result<Vec<League>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leagues WHERE id = ANY($1)");
        sqlx::query_as::<_, League>(&query)
            .bind(ids)
            .fetch_all(executor)
            .await
    }

    /// List all leagues, ordered by id.
    pub async fn list_all(executor: impl PgExecutor<'_>) -> Result<Vec<League>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leagues ORDER BY id");
        sqlx::query_as::<_, League>(&query).fetch_all(executor).await
    }

    /// Insert a single league.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        record: &LeagueUpsert,
    ) -> Result<League, sqlx::Error> {
        let query = format!(
            "INSERT INTO leagues (id, sport_id, country_id, name, active, short_code, \
             image_path, league_type, sub_type, last_played_at, category, has_jerseys) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, League>(&query)
            .bind(record.id)
            .bind(record.sport_id)
            .bind(record.country_id)
            .bind(&record.name)
            .bind(record.active)
            .bind(&record.short_code)
            .bind(&record.image_path)
            .bind(&record.league_type)
            .bind(&record.sub_type)
            .bind(&record.last_played_at)
            .bind(record.category)
            .bind(record.has_jerseys)
            .fetch_one(executor)
            .await
    }

    /// Bulk-insert leagues in one multi-row INSERT statement.
    ///
    /// A no-op for an empty slice. Returns the number of inserted rows.
    pub async fn insert_many(
        executor: impl PgExecutor<'_>,
        records: &[LeagueUpsert],
    ) -> Result<u64, sqlx::Error> {
        if records.is_empty() {
            return Ok(0);
        }
        let mut builder = QueryBuilder::new(
            "INSERT INTO leagues (id, sport_id, country_id, name, active, short_code, \
             image_path, league_type, sub_type, last_played_at, category, has_jerseys) ",
        );
        builder.push_values(records, |mut row, record| {
            row.push_bind(record.id)
                .push_bind(record.sport_id)
                .push_bind(record.country_id)
                .push_bind(&record.name)
                .push_bind(record.active)
                .push_bind(&record.short_code)
                .push_bind(&record.image_path)
                .push_bind(&record.league_type)
                .push_bind(&record.sub_type)
                .push_bind(&record.last_played_at)
                .push_bind(record.category)
                .push_bind(record.has_jerseys);
        });
        let result = builder.build().execute(executor).await?;
        Ok(result.rows_affected())
    }

    /// Overwrite the mutable fields of an existing league in place.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        record: &LeagueUpsert,
    ) -> Result<League, sqlx::Error> {
        let query = format!(
            "UPDATE leagues \
             SET sport_id = $2, country_id = $3, name = $4, active = $5, short_code = $6, \
                 image_path = $7, league_type = $8, sub_type = $9, last_played_at = $10, \
                 category = $11, has_jerseys = $12, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, League>(&query)
            .bind(record.id)
            .bind(record.sport_id)
            .bind(record.country_id)
            .bind(&record.name)
            .bind(record.active)
            .bind(&record.short_code)
            .bind(&record.image_path)
            .bind(&record.league_type)
            .bind(&record.sub_type)
            .bind(&record.last_played_at)
            .bind(record.category)
            .bind(record.has_jerseys)
            .fetch_one(executor)
            .await
    }
}
