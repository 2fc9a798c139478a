use anyhow::Result;
use colored::Colorize;
use log::info;
use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::repository::{FileScoreRepository, ScoreRepository};
use crate::simulator::{self, RankingRow};

/// CLI-side orchestration: load a season through the repository, run the
/// simulation and print the rankings table to the terminal.
pub struct RankingsService {
    config: AppConfig,
    repository: Arc<dyn ScoreRepository>,
}

impl RankingsService {
    pub fn new(config: AppConfig) -> Self {
        let league_dir = std::env::var("LEAGUE_DATA_DIR")
            .unwrap_or_else(|_| config.repository.league_dir.clone());
        let repository = Arc::new(FileScoreRepository::new(league_dir));
        Self { config, repository }
    }

    pub fn run(&self, league_id: i64, season_id: i32) -> Result<()> {
        info!("Fetching league {} season {}", league_id, season_id);
        let league = self.repository.fetch_league(league_id, season_id)?;

        info!(
            "Simulating {} teams over {} weeks",
            league.teams.len(),
            league.weeks
        );
        let rows = simulator::compute_rankings(&league, &self.config.simulator)?;

        self.print_table(&rows);
        Ok(())
    }

    fn print_table(&self, rows: &[RankingRow]) {
        println!(
            "{:<30} {:>10} {:>9} {:>15} {:>8}",
            "Team", "Simulated", "Actual", "Expected", "Luck"
        );

        for row in rows {
            let simulated = format!("{} - {}", row.total_wins, row.total_losses);
            let simulated = if row.total_wins >= row.total_losses {
                simulated.green()
            } else {
                simulated.red()
            };

            let actual = format!("{} - {}", row.actual.wins, row.actual.losses);
            let expected = format!("{:.2} - {:.2}", row.expected.wins, row.expected.losses);

            let luck = match row.luck {
                Some(luck) if luck < 0.0 => format!("{luck:.4}").red(),
                Some(luck) => format!("{luck:.4}").green(),
                None => "-".to_string().normal(),
            };

            println!("{:<30} {:>10} {:>9} {:>15} {:>8}", row.name, simulated, actual, expected, luck);
        }
    }
}
