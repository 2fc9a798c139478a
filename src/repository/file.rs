use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::ScoreRepository;
use crate::domain::League;
use crate::errors::RepositoryError;

/// JSON-file-backed score source: one `<leagueId>-<seasonId>.json` file per
/// season under a configured directory. Stands in for the provider fetch,
/// which lives outside this service.
pub struct FileScoreRepository {
    league_dir: PathBuf,
}

impl FileScoreRepository {
    pub fn new<P: AsRef<Path>>(league_dir: P) -> Self {
        Self {
            league_dir: league_dir.as_ref().to_path_buf(),
        }
    }

    fn league_path(&self, league_id: i64, season_id: i32) -> PathBuf {
        self.league_dir.join(format!("{league_id}-{season_id}.json"))
    }

    fn unavailable(league_id: i64, season_id: i32, reason: String) -> RepositoryError {
        RepositoryError::DataUnavailable {
            league_id,
            season_id,
            reason,
        }
    }
}

impl ScoreRepository for FileScoreRepository {
    fn fetch_league(&self, league_id: i64, season_id: i32) -> Result<League, RepositoryError> {
        let path = self.league_path(league_id, season_id);

        if !path.exists() {
            return Err(Self::unavailable(
                league_id,
                season_id,
                format!("no season file at {}", path.display()),
            ));
        }

        let json = fs::read_to_string(&path).map_err(|e| {
            Self::unavailable(league_id, season_id, format!("failed to read season file: {e}"))
        })?;

        let league: League = serde_json::from_str(&json).map_err(|e| {
            Self::unavailable(league_id, season_id, format!("failed to parse season file: {e}"))
        })?;

        info!("Loaded league data from {}", path.display());
        Ok(league)
    }
}
