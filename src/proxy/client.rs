//! 上游客户端
//! 台北市雨水下水道开放数据 API

use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::error::UpstreamError;

/// 官方公开的查询地址,loginId/dataKey 即开放数据文档中的公共凭证
pub const DEFAULT_RAIN_API_URL: &str =
    "https://wic.heo.taipei/OpenData/API/Rain/Get?stationNo=&loginId=open_rain&dataKey=85452C1D";

/// 上游雨量 API 客户端,复用同一个连接池
pub struct UpstreamClient {
    client: Client,
    rain_url: Url,
}

impl UpstreamClient {
    pub fn new(rain_url: Url) -> Self {
        Self {
            client: Client::new(),
            rain_url,
        }
    }

    pub fn rain_url(&self) -> &Url {
        &self.rain_url
    }

    /// 拉取当前全部测站雨量数据
    ///
    /// 不设超时、不重试;上游非 2xx 或响应体不是 JSON 都视为失败
    pub async fn fetch_rain(&self) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .get(self.rain_url.clone())
            .send()
            .await?
            .error_for_status()?;
        let data = response.json::<Value>().await?;
        Ok(data)
    }
}
