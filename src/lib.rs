//! 台北雨量 SPA 服务
//! 反代开放数据雨量 API,并托管编译后的前端静态文件

pub mod api;
pub mod proxy;
pub mod state;
pub mod web;
