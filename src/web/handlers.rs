//! Web 处理器

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::state::AppState;

/// 所有未匹配的路由(不限方法)回传 index.html,交给前端路由处理
pub async fn spa_index(State(state): State<Arc<AppState>>) -> Response {
    let index = state.static_dir.join("index.html");
    match tokio::fs::read(&index).await {
        Ok(bytes) => Html(bytes).into_response(),
        Err(err) => {
            tracing::warn!("entry document {:?} not readable: {}", index, err);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
