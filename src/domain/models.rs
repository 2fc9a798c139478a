use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

pub type TeamId = i64;

/// A fantasy team and its scores for the season, one entry per week in
/// chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub weekly_scores: Vec<f64>,
}

/// One real head-to-head pairing from the league schedule. `week` is
/// zero-based; the outcome is derived from the two teams' scores that week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Matchup {
    pub week: usize,
    pub home: TeamId,
    pub away: TeamId,
}

/// A full season of league data as supplied by the score repository.
/// Team order is display order, not ranking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub league_id: i64,
    pub season_id: i32,
    pub weeks: usize,
    pub teams: Vec<Team>,
    pub schedule: Vec<Matchup>,
}

impl League {
    /// Check the shape invariants the simulator relies on. A league that
    /// fails any of these is rejected outright rather than simulated.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.teams.len() < 2 {
            return Err(SimulationError::NotEnoughTeams {
                found: self.teams.len(),
            });
        }

        for team in &self.teams {
            if team.weekly_scores.len() != self.weeks {
                return Err(SimulationError::UnevenWeekCounts {
                    team: team.name.clone(),
                    expected: self.weeks,
                    found: team.weekly_scores.len(),
                });
            }
        }

        // Output rows are keyed by team name, so names must be unique.
        let mut seen = HashSet::new();
        for team in &self.teams {
            if !seen.insert(team.name.as_str()) {
                return Err(SimulationError::DuplicateTeamName {
                    name: team.name.clone(),
                });
            }
        }

        let known_ids: HashSet<TeamId> = self.teams.iter().map(|t| t.id).collect();
        for matchup in &self.schedule {
            if matchup.week >= self.weeks {
                return Err(SimulationError::ScheduleWeekOutOfRange {
                    week: matchup.week,
                    weeks: self.weeks,
                });
            }
            for team_id in [matchup.home, matchup.away] {
                if !known_ids.contains(&team_id) {
                    return Err(SimulationError::UnknownScheduleTeam {
                        week: matchup.week,
                        team_id,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn team_by_id(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }
}
