//! The closed set of sync operations.
//!
//! Each variant maps to one upstream endpoint and one target entity
//! type.  The stable [`name`](Operation::name) is what audit rows and
//! log fields carry -- it never changes, even if endpoints move.

use crate::types::DbId;

/// One synchronization run against the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Fetch the squad of a single team (list of squad players).
    TeamSquad { team_id: DbId },
    /// Fetch all leagues (list of leagues).
    Leagues,
    /// Fetch one league by id (single-entity payload).
    LeagueDetail { league_id: DbId },
}

impl Operation {
    /// Stable operation name used in audit rows and tracing fields.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::TeamSquad { .. } => "team_squad",
            Operation::Leagues => "leagues",
            Operation::LeagueDetail { .. } => "league_detail",
        }
    }

    /// Upstream path for this operation, relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Operation::TeamSquad { team_id } => format!("/squads/teams/{team_id}"),
            Operation::Leagues => "/leagues".to_string(),
            Operation::LeagueDetail { league_id } => format!("/leagues/{league_id}"),
        }
    }
}

/// Severity of an audit row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    /// String form stored in the `sync_logs.level` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "Info",
            LogLevel::Error => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_paths_match_upstream_templates() {
        assert_eq!(
            Operation::TeamSquad { team_id: 1 }.path(),
            "/squads/teams/1"
        );
        assert_eq!(Operation::Leagues.path(), "/leagues");
        assert_eq!(
            Operation::LeagueDetail { league_id: 271 }.path(),
            "/leagues/271"
        );
    }

    #[test]
    fn operation_names_are_stable() {
        assert_eq!(Operation::TeamSquad { team_id: 9 }.name(), "team_squad");
        assert_eq!(Operation::Leagues.name(), "leagues");
        assert_eq!(
            Operation::LeagueDetail { league_id: 9 }.name(),
            "league_detail"
        );
    }

    #[test]
    fn log_levels_render_as_stored_strings() {
        assert_eq!(LogLevel::Info.as_str(), "Info");
        assert_eq!(LogLevel::Error.as_str(), "Error");
    }
}
