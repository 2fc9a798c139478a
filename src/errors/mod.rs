use thiserror::Error;

/// Failures of the league shape invariants. A league that trips one of
/// these must not be simulated; no partial output is produced.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("malformed season data: league has {found} team(s), need at least 2")]
    NotEnoughTeams { found: usize },

    #[error(
        "malformed season data: team '{team}' has {found} weekly score(s), expected {expected}"
    )]
    UnevenWeekCounts {
        team: String,
        expected: usize,
        found: usize,
    },

    #[error("malformed season data: duplicate team name '{name}'")]
    DuplicateTeamName { name: String },

    #[error("malformed season data: matchup in week {week} references unknown team id {team_id}")]
    UnknownScheduleTeam { week: usize, team_id: i64 },

    #[error("malformed season data: matchup week {week} is outside the {weeks}-week season")]
    ScheduleWeekOutOfRange { week: usize, weeks: usize },
}

/// Upstream data-source failures. The simulator itself never touches the
/// network or the filesystem; these come from the injected repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("league data unavailable for league {league_id}, season {season_id}: {reason}")]
    DataUnavailable {
        league_id: i64,
        season_id: i32,
        reason: String,
    },
}
