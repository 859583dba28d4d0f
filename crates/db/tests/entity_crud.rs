//! Integration tests for the repository layer.
//!
//! Exercises the narrow per-entity interfaces against a real database:
//! upsert-by-external-id semantics, id-set filtering, bulk inserts and
//! the append-only sync log.

use sqlx::PgPool;

use futsync_db::models::league::LeagueUpsert;
use futsync_db::models::squad_player::SquadPlayerUpsert;
use futsync_db::models::sync_log::CreateSyncLog;
use futsync_db::repositories::{LeagueRepo, SquadPlayerRepo, SyncLogRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn league(id: i64, name: &str) -> LeagueUpsert {
    LeagueUpsert {
        id,
        sport_id: Some(1),
        country_id: Some(462),
        name: Some(name.to_string()),
        active: Some(true),
        short_code: None,
        image_path: None,
        league_type: Some("league".to_string()),
        sub_type: Some("domestic".to_string()),
        last_played_at: None,
        category: Some(1),
        has_jerseys: Some(false),
    }
}

fn player(id: i64, jersey_number: i64) -> SquadPlayerUpsert {
    SquadPlayerUpsert {
        id,
        transfer_id: None,
        player_id: Some(id * 10),
        team_id: Some(1),
        position_id: Some(24),
        detailed_position_id: None,
        start_date: Some("2023-07-01".to_string()),
        end_date: None,
        captain: Some(false),
        jersey_number: Some(jersey_number),
    }
}

// ---------------------------------------------------------------------------
// Leagues
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_then_get_round_trips_a_league(pool: PgPool) {
    let created = LeagueRepo::insert(&pool, &league(271, "Superliga"))
        .await
        .unwrap();
    assert_eq!(created.id, 271);
    assert_eq!(created.name.as_deref(), Some("Superliga"));

    let fetched = LeagueRepo::get_by_id(&pool, 271).await.unwrap().unwrap();
    assert_eq!(fetched.id, 271);
    assert_eq!(fetched.league_type.as_deref(), Some("league"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_by_id_returns_none_for_unknown_league(pool: PgPool) {
    assert!(LeagueRepo::get_by_id(&pool, 999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_ids_only_returns_requested_leagues(pool: PgPool) {
    LeagueRepo::insert_many(
        &pool,
        &[
            league(1, "A"),
            league(2, "B"),
            league(3, "C"),
        ],
    )
    .await
    .unwrap();

    let mut found = LeagueRepo::list_by_ids(&pool, &[1, 3, 99]).await.unwrap();
    found.sort_by_key(|l| l.id);

    let ids: Vec<i64> = found.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_many_reports_inserted_row_count(pool: PgPool) {
    let inserted = LeagueRepo::insert_many(&pool, &[league(10, "X"), league(11, "Y")])
        .await
        .unwrap();
    assert_eq!(inserted, 2);

    let none = LeagueRepo::insert_many(&pool, &[]).await.unwrap();
    assert_eq!(none, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_overwrites_fields_in_place(pool: PgPool) {
    LeagueRepo::insert(&pool, &league(271, "Superliga"))
        .await
        .unwrap();

    let mut changed = league(271, "Superligaen");
    changed.country_id = Some(320);
    let updated = LeagueRepo::update(&pool, &changed).await.unwrap();

    assert_eq!(updated.name.as_deref(), Some("Superligaen"));
    assert_eq!(updated.country_id, Some(320));
    assert!(updated.updated_at >= updated.created_at);

    // Still a single row.
    let all = LeagueRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
}

// ---------------------------------------------------------------------------
// Squad players
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn squad_players_bulk_insert_and_filter(pool: PgPool) {
    SquadPlayerRepo::insert_many(&pool, &[player(100, 7), player(101, 9), player(102, 1)])
        .await
        .unwrap();

    let found = SquadPlayerRepo::list_by_ids(&pool, &[101]).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].jersey_number, Some(9));

    let all = SquadPlayerRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn squad_player_update_overwrites_the_full_record(pool: PgPool) {
    SquadPlayerRepo::insert_many(&pool, &[player(100, 7)]).await.unwrap();

    let mut changed = player(100, 10);
    changed.captain = Some(true);
    changed.end_date = Some("2026-06-30".to_string());
    let updated = SquadPlayerRepo::update(&pool, &changed).await.unwrap();

    assert_eq!(updated.jersey_number, Some(10));
    assert_eq!(updated.captain, Some(true));
    assert_eq!(updated.end_date.as_deref(), Some("2026-06-30"));
}

// ---------------------------------------------------------------------------
// Sync log
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sync_log_rows_are_appended_with_generated_ids(pool: PgPool) {
    let first = SyncLogRepo::append(
        &pool,
        &CreateSyncLog {
            level: "Info".to_string(),
            operation: "leagues".to_string(),
            message: "Synchronized 2 records (2 inserted, 0 updated, 0 unchanged)".to_string(),
            detail: None,
        },
    )
    .await
    .unwrap();

    let second = SyncLogRepo::append(
        &pool,
        &CreateSyncLog {
            level: "Error".to_string(),
            operation: "team_squad".to_string(),
            message: "An error occurred during processing".to_string(),
            detail: Some("database error: timeout".to_string()),
        },
    )
    .await
    .unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.level, "Info");
    assert!(first.detail.is_none());
    assert_eq!(second.detail.as_deref(), Some("database error: timeout"));
}
