//! Arithmetic Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// |x| 超过平方运算上限
    #[error("x is too large")]
    TooLarge(i64),

    /// 严格模式下 x 不在允许区间内
    #[error("x out of allowed range ({min}, {max})")]
    OutOfRange { value: i64, min: i64, max: i64 },
}
