//! Stats Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// 某个元素无法解析为整数
    #[error("Invalid number format")]
    InvalidNumber(String),

    #[error("numbers must not be empty")]
    Empty,
}
