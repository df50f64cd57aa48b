//! Web 服务器

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::routing::{any, MethodRouter};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use url::Url;

use super::handlers;
use crate::api;
use crate::state::AppState;

/// Web 服务器
pub struct WebServer {
    port: u16,
    state: Arc<AppState>,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(port: u16, static_dir: PathBuf, rain_url: Url) -> Self {
        Self {
            port,
            state: Arc::new(AppState::new(rain_url, static_dir)),
        }
    }

    /// 构建完整路由
    ///
    /// API 路由优先,静态文件作为 fallback;
    /// 对于 SPA,未匹配的路径(不限方法)返回 index.html
    pub fn router(&self) -> Router {
        let api_routes = api::build_routes(self.state.clone());

        let app = Router::new()
            .merge(api_routes)
            .layer(CorsLayer::permissive())
            .layer(axum::middleware::from_fn(api::common::request_logger));

        let static_dir = &self.state.static_dir;
        if !static_dir.exists() {
            tracing::warn!("Static directory {:?} not found", static_dir);
        }

        let spa_entry: MethodRouter = any(handlers::spa_index).with_state(self.state.clone());
        let serve_dir = ServeDir::new(static_dir)
            .append_index_html_on_directories(true)
            .call_fallback_on_method_not_allowed(true)
            .fallback(spa_entry);

        app.fallback_service(serve_dir)
    }

    /// 启动服务器,直到进程被外部终止
    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();

        // 在 Docker / Cloud Run 中需要绑定 0.0.0.0
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .await
            .context("server error")?;
        Ok(())
    }
}
