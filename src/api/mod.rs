use crate::state::AppState;
use crate::web::handlers::spa_index;
use axum::{routing::get, Router};
use std::sync::Arc;

pub mod common;
mod rain;

pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Rain proxy; non-GET methods fall through to the SPA entry document,
        // same as every other unmatched route
        .route("/rain-api", get(rain::get_rain).fallback(spa_index))
        // Health
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}
