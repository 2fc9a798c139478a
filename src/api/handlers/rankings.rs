use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use std::sync::Arc;

use super::{AppState, RankingsParams};
use crate::api::models::{RankingRowItem, RankingsResponse};
use crate::errors::RepositoryError;
use crate::simulator;

pub async fn get_rankings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingsParams>,
) -> impl IntoResponse {
    let league = match state
        .repository
        .fetch_league(params.league_id, params.season_id)
    {
        Ok(league) => league,
        Err(e @ RepositoryError::DataUnavailable { .. }) => {
            return (StatusCode::NOT_FOUND, e.to_string()).into_response();
        }
    };

    let rows = match simulator::compute_rankings(&league, &state.config.simulator) {
        Ok(rows) => rows,
        // The season data itself is inconsistent; nothing to retry.
        Err(e) => return (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
    };

    let total_teams = rows.len();
    let rankings = rows
        .into_iter()
        .map(|row| RankingRowItem::from_row(row, total_teams))
        .collect();

    Json(RankingsResponse {
        league_id: league.league_id,
        season_id: league.season_id,
        computed_at: Utc::now(),
        rankings,
    })
    .into_response()
}
