//! 应用层错误定义
//!
//! 统一的查询错误类型，携带对外暴露的错误类别

use thiserror::Error;

use crate::domain::{ArithmeticError, StatsError};

/// 应用层错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// 输入格式或取值不合法（400）
    #[error("{0}")]
    BadRequest(String),

    /// 输入可解析但语义上不可处理（422）
    #[error("{0}")]
    Unprocessable(String),
}

impl ApplicationError {
    /// 创建 BadRequest 错误
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// 创建 Unprocessable 错误
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg) | Self::Unprocessable(msg) => msg,
        }
    }
}

impl From<ArithmeticError> for ApplicationError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::TooLarge(_) => Self::bad_request(err.to_string()),
            ArithmeticError::OutOfRange { .. } => Self::unprocessable(err.to_string()),
        }
    }
}

impl From<StatsError> for ApplicationError {
    fn from(err: StatsError) -> Self {
        Self::bad_request(err.to_string())
    }
}
