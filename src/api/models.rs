use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::colors::{luck_cell_color, record_cell_color};
use crate::simulator::RankingRow;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordItem {
    pub wins: u32,
    pub losses: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedRecordItem {
    pub wins: f64,
    pub losses: f64,
}

/// One table row, shaped the way the rankings page consumes it. The weekly
/// `wins` array carries one entry per week; cell colors are precomputed so
/// the presenter never re-implements the scale.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRowItem {
    pub name: String,
    pub logo: Option<String>,
    pub wins: Vec<u32>,
    pub total_wins: u32,
    pub total_losses: u32,
    pub actual_record: RecordItem,
    pub expected_record: ExpectedRecordItem,
    pub luck_rating: Option<f64>,
    pub record_colors: Vec<String>,
    pub luck_color: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingsResponse {
    pub league_id: i64,
    pub season_id: i32,
    pub computed_at: DateTime<Utc>,
    pub rankings: Vec<RankingRowItem>,
}

impl RankingRowItem {
    pub fn from_row(row: RankingRow, total_teams: usize) -> Self {
        let opponents = (total_teams - 1) as u32;
        let record_colors = row
            .weekly_wins
            .iter()
            .map(|&wins| record_cell_color(wins, opponents - wins).to_string())
            .collect();
        let luck_color = row.luck.map(|luck| luck_cell_color(luck).to_string());

        Self {
            name: row.name,
            logo: row.logo_url,
            wins: row.weekly_wins,
            total_wins: row.total_wins,
            total_losses: row.total_losses,
            actual_record: RecordItem {
                wins: row.actual.wins,
                losses: row.actual.losses,
            },
            expected_record: ExpectedRecordItem {
                wins: row.expected.wins,
                losses: row.expected.losses,
            },
            luck_rating: row.luck,
            record_colors,
            luck_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::{ExpectedRecord, Record};

    #[test]
    fn test_row_serializes_with_camel_case_and_colors() {
        let row = RankingRow {
            team_id: 1,
            name: "A".to_string(),
            logo_url: None,
            weekly_wins: vec![2, 0],
            total_wins: 2,
            total_losses: 2,
            actual: Record { wins: 1, losses: 1 },
            expected: ExpectedRecord {
                wins: 1.0,
                losses: 1.0,
            },
            luck: Some(0.0),
        };

        let item = RankingRowItem::from_row(row, 3);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["totalWins"], 2);
        assert_eq!(json["actualRecord"]["losses"], 1);
        assert_eq!(json["luckRating"], 0.0);
        // Week 0: 2-0, green scale. Week 1: 0-2, red scale.
        assert_eq!(json["recordColors"][0], "hsl(100, 65%, 40%)");
        assert_eq!(json["recordColors"][1], "hsl(0, 65%, 50%)");
        assert_eq!(json["luckColor"], "hsl(120, 65%, 70%)");
    }

    #[test]
    fn test_undefined_luck_serializes_as_null() {
        let row = RankingRow {
            team_id: 2,
            name: "B".to_string(),
            logo_url: None,
            weekly_wins: vec![0],
            total_wins: 0,
            total_losses: 1,
            actual: Record::default(),
            expected: ExpectedRecord {
                wins: 0.0,
                losses: 1.0,
            },
            luck: None,
        };

        let json = serde_json::to_value(RankingRowItem::from_row(row, 2)).unwrap();
        assert!(json["luckRating"].is_null());
        assert!(json["luckColor"].is_null());
    }
}
