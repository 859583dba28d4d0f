//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept any Postgres executor as the first argument, so the same
//! method serves both pool calls and a transaction.  Only the
//! operations the reconciler actually uses are exposed.

pub mod league_repo;
pub mod squad_player_repo;
pub mod sync_log_repo;

pub use league_repo::LeagueRepo;
pub use squad_player_repo::SquadPlayerRepo;
pub use sync_log_repo::SyncLogRepo;
