use std::path::PathBuf;
use url::Url;

use crate::proxy::UpstreamClient;

/// Web 应用状态
///
/// 启动后只读,handler 之间无共享可变状态
pub struct AppState {
    pub upstream: UpstreamClient,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(rain_url: Url, static_dir: PathBuf) -> Self {
        Self {
            upstream: UpstreamClient::new(rain_url),
            static_dir,
        }
    }
}
