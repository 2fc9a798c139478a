use std::sync::Arc;

use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::repository::ScoreRepository;

pub mod rankings;

pub struct AppState {
    pub repository: Arc<dyn ScoreRepository>,
    pub config: AppConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingsParams {
    pub league_id: i64,
    pub season_id: i32,
}
