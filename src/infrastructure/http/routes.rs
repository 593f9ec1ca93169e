//! HTTP Routes
//!
//! API Endpoints:
//! - /                  GET  问候语
//! - /health            GET  存活检查
//! - /square/{x}        GET  x²
//! - /double/{x}        GET  2x（x 来自路径）
//! - /double            GET  2x（x 来自查询参数）
//! - /stats/{numbers}   GET  逗号分隔列表统计
//! - /stats             GET  重复查询参数列表统计

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/health", get(handlers::health))
        .route("/square/:x", get(handlers::square))
        .route("/double", get(handlers::double_query))
        .route("/double/:x", get(handlers::double_path))
        .route("/stats", get(handlers::stats_query))
        .route("/stats/:numbers", get(handlers::stats_path))
        .fallback(handlers::not_found)
}
