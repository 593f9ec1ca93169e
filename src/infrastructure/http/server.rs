//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use http::header::CONTENT_TYPE;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::{HttpConfig, ServerConfig};

/// 构建带全部中间件的 Router
pub fn build_router(state: Arc<AppState>, http: &HttpConfig) -> Router {
    let router = create_routes()
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TimeoutLayer::new(http.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if !http.cors_enabled {
        return router;
    }

    // 只读 GET 接口，允许所有来源
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    router.layer(cors)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    http: HttpConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, http: HttpConfig, state: AppState) -> Self {
        Self {
            config,
            http,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state.clone(), &self.http);
        let addr = self.config.addr();

        let listener = TcpListener::bind(&addr).await?;
        info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}
