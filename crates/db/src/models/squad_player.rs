//! Squad player entity and its upstream wire record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use futsync_core::types::{DbId, Timestamp};

/// A persisted squad membership row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SquadPlayer {
    /// Assigned by the upstream API, never generated locally.
    pub id: DbId,
    pub transfer_id: Option<DbId>,
    pub player_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub position_id: Option<DbId>,
    pub detailed_position_id: Option<DbId>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub captain: Option<bool>,
    pub jersey_number: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An incoming squad record as the upstream API serializes it.
///
/// The API calls the membership period fields `start` / `end`; those
/// collide with too much in a SQL schema, hence the column renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadPlayerUpsert {
    pub id: DbId,
    #[serde(default)]
    pub transfer_id: Option<DbId>,
    #[serde(default)]
    pub player_id: Option<DbId>,
    #[serde(default)]
    pub team_id: Option<DbId>,
    #[serde(default)]
    pub position_id: Option<DbId>,
    #[serde(default)]
    pub detailed_position_id: Option<DbId>,
    #[serde(default, rename = "start")]
    pub start_date: Option<String>,
    #[serde(default, rename = "end")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub captain: Option<bool>,
    #[serde(default)]
    pub jersey_number: Option<i64>,
}

impl From<&SquadPlayer> for SquadPlayerUpsert {
    /// Project a persisted row onto the wire shape for change detection.
    fn from(row: &SquadPlayer) -> Self {
        Self {
            id: row.id,
            transfer_id: row.transfer_id,
            player_id: row.player_id,
            team_id: row.team_id,
            position_id: row.position_id,
            detailed_position_id: row.detailed_position_id,
            start_date: row.start_date.clone(),
            end_date: row.end_date.clone(),
            captain: row.captain,
            jersey_number: row.jersey_number,
        }
    }
}
