use serde::{Deserialize, Serialize};

use crate::domain::TeamId;

/// A plain win/loss tally. Tied weeks count for neither column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

/// Simulated totals scaled down to a one-opponent-per-week schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedRecord {
    pub wins: f64,
    pub losses: f64,
}

/// One team's row of the power rankings.
///
/// `weekly_wins[w]` is how many of the other teams this team outscored in
/// week `w`; the matching loss count is always `total_teams - 1 -
/// weekly_wins[w]`. `actual` comes from the real schedule and is never
/// derived from the simulation. `luck` is `None` when the team has zero
/// expected wins, since the ratio is undefined there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRow {
    pub team_id: TeamId,
    pub name: String,
    pub logo_url: Option<String>,
    pub weekly_wins: Vec<u32>,
    pub total_wins: u32,
    pub total_losses: u32,
    pub actual: Record,
    pub expected: ExpectedRecord,
    pub luck: Option<f64>,
}
