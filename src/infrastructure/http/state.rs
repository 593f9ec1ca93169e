//! Application State
//!
//! 所有 Query Handlers 均无状态，AppState 只是把它们集中交给路由

use crate::application::{DoubleHandler, SquareHandler, StatsHandler};

/// 应用状态
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub square_handler: SquareHandler,
    pub double_handler: DoubleHandler,
    pub stats_handler: StatsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new() -> Self {
        Self {
            square_handler: SquareHandler::new(),
            double_handler: DoubleHandler::new(),
            stats_handler: StatsHandler::new(),
        }
    }
}
