//! Infrastructure Layer - 基础设施层
//!
//! HTTP 适配：路由、参数解析、错误映射、中间件与服务器

pub mod http;

pub use http::{AppState, HttpServer};
