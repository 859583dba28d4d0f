//! Entity models and upsert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` upsert DTO matching the upstream wire format,
//!   used for both inserts and in-place updates

pub mod league;
pub mod squad_player;
pub mod sync_log;
