//! 应用层 - 查询
//!
//! 每个端点对应一个查询，查询之间不共享状态

mod arithmetic_queries;
mod stats_queries;

pub mod handlers;

pub use arithmetic_queries::*;
pub use stats_queries::*;
