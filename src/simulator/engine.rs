use std::collections::HashMap;

use log::info;
use ndarray::Array2;

use super::luck::{expected_record, luck_rating};
use super::types::{RankingRow, Record};
use crate::config::settings::SimulatorSettings;
use crate::domain::{League, TeamId};
use crate::errors::SimulationError;

/// Run the all-pairs standings simulation: for every team and every week,
/// score the team against the whole league instead of its single scheduled
/// opponent, then derive totals, the expected record and the luck rating.
///
/// Wins are strictly-greater comparisons; a tied week is a win for neither
/// side and lands in the loss column through the complement. This mirrors
/// the league's "beat everyone who scored less" framing and is intentional.
pub fn compute_rankings(
    league: &League,
    settings: &SimulatorSettings,
) -> Result<Vec<RankingRow>, SimulationError> {
    league.validate()?;

    let n_teams = league.teams.len();
    let opponents_per_week = n_teams - 1;
    info!(
        "Simulating league {} season {}: {} teams x {} weeks",
        league.league_id, league.season_id, n_teams, league.weeks
    );

    let scores = build_score_matrix(league);
    let actual_records = derive_actual_records(league, &scores);

    let mut rows = Vec::with_capacity(n_teams);
    for (idx, team) in league.teams.iter().enumerate() {
        let weekly_wins = count_weekly_wins(&scores, idx);
        let total_wins: u32 = weekly_wins.iter().sum();
        let total_losses = (league.weeks * opponents_per_week) as u32 - total_wins;

        let actual = actual_records.get(&team.id).copied().unwrap_or_default();
        let expected = expected_record(total_wins, total_losses, opponents_per_week);
        let luck = luck_rating(actual.wins, expected.wins, settings.luck_precision_digits);

        rows.push(RankingRow {
            team_id: team.id,
            name: team.name.clone(),
            logo_url: team.logo_url.clone(),
            weekly_wins,
            total_wins,
            total_losses,
            actual,
            expected,
            luck,
        });
    }

    Ok(rows)
}

/// Lay the season out as a teams x weeks matrix, rows in league display
/// order.
fn build_score_matrix(league: &League) -> Array2<f64> {
    let mut scores = Array2::<f64>::zeros((league.teams.len(), league.weeks));
    for (idx, team) in league.teams.iter().enumerate() {
        for (week, &score) in team.weekly_scores.iter().enumerate() {
            scores[[idx, week]] = score;
        }
    }
    scores
}

/// Per-week simulated win counts for one team: how many other rows of the
/// week's column it strictly outscored.
fn count_weekly_wins(scores: &Array2<f64>, team_idx: usize) -> Vec<u32> {
    let weeks = scores.ncols();
    let mut weekly_wins = Vec::with_capacity(weeks);

    for week in 0..weeks {
        let own_score = scores[[team_idx, week]];
        let wins = scores
            .column(week)
            .iter()
            .enumerate()
            .filter(|&(other_idx, &other_score)| other_idx != team_idx && other_score < own_score)
            .count();
        weekly_wins.push(wins as u32);
    }

    weekly_wins
}

/// Fold the real schedule into per-team records. These are the genuine
/// head-to-head outcomes and are kept separate from anything the
/// simulation implies; a tied matchup counts for neither team.
fn derive_actual_records(league: &League, scores: &Array2<f64>) -> HashMap<TeamId, Record> {
    let team_idx: HashMap<TeamId, usize> = league
        .teams
        .iter()
        .enumerate()
        .map(|(idx, team)| (team.id, idx))
        .collect();

    let mut records: HashMap<TeamId, Record> =
        league.teams.iter().map(|t| (t.id, Record::default())).collect();

    for matchup in &league.schedule {
        // Validation guarantees both ids resolve.
        let home_score = scores[[team_idx[&matchup.home], matchup.week]];
        let away_score = scores[[team_idx[&matchup.away], matchup.week]];

        let (winner, loser) = if home_score > away_score {
            (matchup.home, matchup.away)
        } else if away_score > home_score {
            (matchup.away, matchup.home)
        } else {
            continue;
        };

        if let Some(record) = records.get_mut(&winner) {
            record.wins += 1;
        }
        if let Some(record) = records.get_mut(&loser) {
            record.losses += 1;
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Matchup, Team};

    fn team(id: TeamId, name: &str, scores: &[f64]) -> Team {
        Team {
            id,
            name: name.to_string(),
            logo_url: None,
            weekly_scores: scores.to_vec(),
        }
    }

    fn settings() -> SimulatorSettings {
        SimulatorSettings::default()
    }

    fn three_team_one_week() -> League {
        League {
            league_id: 1788259,
            season_id: 2019,
            weeks: 1,
            teams: vec![
                team(1, "A", &[100.0]),
                team(2, "B", &[90.0]),
                team(3, "C", &[80.0]),
            ],
            schedule: vec![Matchup {
                week: 0,
                home: 1,
                away: 2,
            }],
        }
    }

    #[test]
    fn test_three_team_single_week_win_counts() {
        let rows = compute_rankings(&three_team_one_week(), &settings()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].weekly_wins, vec![2]);
        assert_eq!(rows[1].weekly_wins, vec![1]);
        assert_eq!(rows[2].weekly_wins, vec![0]);
        assert_eq!(rows[0].total_losses, 0);
        assert_eq!(rows[1].total_losses, 1);
        assert_eq!(rows[2].total_losses, 2);
    }

    #[test]
    fn test_tied_week_is_a_win_for_neither() {
        let league = League {
            league_id: 1,
            season_id: 2020,
            weeks: 1,
            teams: vec![team(1, "A", &[100.0]), team(2, "B", &[100.0])],
            schedule: vec![Matchup {
                week: 0,
                home: 1,
                away: 2,
            }],
        };

        let rows = compute_rankings(&league, &settings()).unwrap();
        // Strict-greater wins; the complement turns the tie into a loss on
        // both rows. The tied real matchup stays off both actual records.
        for row in &rows {
            assert_eq!(row.weekly_wins, vec![0]);
            assert_eq!(row.total_losses, 1);
            assert_eq!(row.actual, Record { wins: 0, losses: 0 });
        }
    }

    #[test]
    fn test_weekly_and_total_invariants() {
        let league = League {
            league_id: 7,
            season_id: 2021,
            weeks: 3,
            teams: vec![
                team(1, "A", &[101.2, 88.0, 131.6]),
                team(2, "B", &[95.5, 120.3, 90.1]),
                team(3, "C", &[110.0, 79.9, 102.4]),
                team(4, "D", &[84.3, 99.0, 125.5]),
            ],
            schedule: vec![
                Matchup { week: 0, home: 1, away: 2 },
                Matchup { week: 0, home: 3, away: 4 },
                Matchup { week: 1, home: 1, away: 3 },
                Matchup { week: 1, home: 2, away: 4 },
                Matchup { week: 2, home: 1, away: 4 },
                Matchup { week: 2, home: 2, away: 3 },
            ],
        };

        let rows = compute_rankings(&league, &settings()).unwrap();
        let opponents = league.teams.len() - 1;

        for row in &rows {
            for (week, &wins) in row.weekly_wins.iter().enumerate() {
                let losses = opponents as u32 - wins;
                assert_eq!(wins + losses, opponents as u32, "week {week}");
            }
            assert_eq!(
                row.total_wins + row.total_losses,
                (league.weeks * opponents) as u32
            );
            // Expected record sums back to the number of weeks played.
            assert!((row.expected.wins + row.expected.losses - league.weeks as f64).abs() < 1e-9);
            // Every real matchup here is decided, so records sum to weeks.
            assert_eq!(row.actual.wins + row.actual.losses, league.weeks as u32);
        }
    }

    #[test]
    fn test_actual_record_comes_from_schedule_not_simulation() {
        // B outscores the league both weeks but only plays A in week 0.
        let league = League {
            league_id: 2,
            season_id: 2020,
            weeks: 2,
            teams: vec![
                team(1, "A", &[100.0, 120.0]),
                team(2, "B", &[110.0, 130.0]),
                team(3, "C", &[90.0, 140.0]),
            ],
            schedule: vec![
                Matchup { week: 0, home: 1, away: 2 },
                Matchup { week: 1, home: 1, away: 3 },
            ],
        };

        let rows = compute_rankings(&league, &settings()).unwrap();
        let by_name: HashMap<&str, &RankingRow> =
            rows.iter().map(|r| (r.name.as_str(), r)).collect();

        assert_eq!(by_name["B"].actual, Record { wins: 1, losses: 0 });
        assert_eq!(by_name["A"].actual, Record { wins: 0, losses: 2 });
        assert_eq!(by_name["C"].actual, Record { wins: 1, losses: 0 });
        // Simulated totals tell a different story than the 1-0 record.
        assert_eq!(by_name["B"].total_wins, 3);
    }

    #[test]
    fn test_luck_zero_when_actual_matches_expected() {
        // A beats B every week in both senses: 2 actual wins, 2 expected.
        let league = League {
            league_id: 3,
            season_id: 2020,
            weeks: 2,
            teams: vec![team(1, "A", &[100.0, 100.0]), team(2, "B", &[90.0, 90.0])],
            schedule: vec![
                Matchup { week: 0, home: 1, away: 2 },
                Matchup { week: 1, home: 2, away: 1 },
            ],
        };

        let rows = compute_rankings(&league, &settings()).unwrap();
        assert_eq!(rows[0].luck, Some(0.0));
    }

    #[test]
    fn test_winless_simulation_gets_luck_sentinel() {
        let league = League {
            league_id: 4,
            season_id: 2020,
            weeks: 2,
            teams: vec![team(1, "A", &[100.0, 100.0]), team(2, "B", &[90.0, 90.0])],
            schedule: vec![
                Matchup { week: 0, home: 1, away: 2 },
                Matchup { week: 1, home: 2, away: 1 },
            ],
        };

        let rows = compute_rankings(&league, &settings()).unwrap();
        assert_eq!(rows[1].total_wins, 0);
        assert_eq!(rows[1].luck, None);
    }

    #[test]
    fn test_malformed_league_yields_no_partial_output() {
        let mut league = three_team_one_week();
        league.teams[2].weekly_scores.clear();

        let err = compute_rankings(&league, &settings()).unwrap_err();
        assert!(matches!(err, SimulationError::UnevenWeekCounts { .. }));
    }
}
