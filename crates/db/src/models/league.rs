//! League entity and its upstream wire record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use futsync_core::types::{DbId, Timestamp};

/// A persisted league row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct League {
    /// Assigned by the upstream API, never generated locally.
    pub id: DbId,
    pub sport_id: Option<DbId>,
    pub country_id: Option<DbId>,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub short_code: Option<String>,
    pub image_path: Option<String>,
    pub league_type: Option<String>,
    pub sub_type: Option<String>,
    pub last_played_at: Option<String>,
    pub category: Option<i64>,
    pub has_jerseys: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An incoming league record as the upstream API serializes it.
///
/// Every descriptive field may be absent on the wire.  `type` is a
/// Rust keyword, hence the `league_type` rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueUpsert {
    pub id: DbId,
    #[serde(default)]
    pub sport_id: Option<DbId>,
    #[serde(default)]
    pub country_id: Option<DbId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub short_code: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default, rename = "type")]
    pub league_type: Option<String>,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub last_played_at: Option<String>,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub has_jerseys: Option<bool>,
}

impl From<&League> for LeagueUpsert {
    /// Project a persisted row onto the wire shape, so incoming records
    /// can be compared field-for-field against what is already stored.
    fn from(row: &League) -> Self {
        Self {
            id: row.id,
            sport_id: row.sport_id,
            country_id: row.country_id,
            name: row.name.clone(),
            active: row.active,
            short_code: row.short_code.clone(),
            image_path: row.image_path.clone(),
            league_type: row.league_type.clone(),
            sub_type: row.sub_type.clone(),
            last_played_at: row.last_played_at.clone(),
            category: row.category,
            has_jerseys: row.has_jerseys,
        }
    }
}
