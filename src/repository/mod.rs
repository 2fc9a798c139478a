pub mod file;

pub use file::FileScoreRepository;

use crate::domain::League;
use crate::errors::RepositoryError;

/// The injected score source: resolves a `(leagueId, seasonId)` pair to a
/// full season of league data, or fails with `DataUnavailable`. Either a
/// complete `League` comes back or the simulation does not run — there are
/// no partial seasons.
pub trait ScoreRepository: Send + Sync {
    fn fetch_league(&self, league_id: i64, season_id: i32) -> Result<League, RepositoryError>;
}
