//! mathdemo - 算术与统计演示服务
//!
//! 分层设计:
//!
//! 领域层 (domain/):
//! - Arithmetic Context: 平方、翻倍
//! - Stats Context: 整数列表统计
//!
//! 应用层 (application/):
//! - Queries: 每个端点对应的查询及处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 路由、参数校验、错误响应、中间件

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
