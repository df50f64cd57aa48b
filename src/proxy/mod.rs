// proxy 模块 - 雨量 API 反代

pub mod client;
pub mod error;

pub use client::{UpstreamClient, DEFAULT_RAIN_API_URL};
pub use error::UpstreamError;
