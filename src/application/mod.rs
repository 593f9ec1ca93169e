//! 应用层 - 用例编排
//!
//! 包含：
//! - queries: 查询及处理器（所有端点都是无状态的只读计算）
//! - error: 应用层错误定义

pub mod error;
pub mod queries;

pub use error::ApplicationError;

pub use queries::{
    // Arithmetic queries
    DoubleQuery,
    SquareQuery,
    // Stats queries
    StatsQuery,
    // Handlers
    handlers::{DoubleHandler, SquareHandler, StatsHandler, StatsResult},
};
