use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::proxy::UpstreamError;
use crate::state::AppState;

/// 代理上游雨量 API;客户端的 query/body 一律忽略
pub async fn get_rain(State(state): State<Arc<AppState>>) -> Result<Json<Value>, UpstreamError> {
    let data = state.upstream.fetch_rain().await?;
    Ok(Json(data))
}
