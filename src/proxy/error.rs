// 错误分类 - 将底层错误转换为日志可读的标签

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// 上游雨量 API 调用错误
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// 分类上游错误,返回值只进日志,不对客户端暴露
pub fn classify_upstream_error(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout_error"
    } else if error.is_connect() {
        "connection_error"
    } else if error.is_status() {
        "status_error"
    } else if error.is_decode() {
        "decode_error"
    } else {
        "unknown_error"
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let Self::Request(ref source) = self;
        tracing::error!(
            "rain api proxy failed ({}): {}",
            classify_upstream_error(source),
            self
        );
        (StatusCode::BAD_GATEWAY, "upstream rainfall API unavailable").into_response()
    }
}
