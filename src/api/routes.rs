use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{AppState, rankings::get_rankings};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/rankings", get(get_rankings))
        .with_state(state)
}
