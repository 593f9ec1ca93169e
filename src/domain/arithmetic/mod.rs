//! Arithmetic Context - 单值运算限界上下文
//!
//! 职责:
//! - 平方运算及其幅值上限
//! - 翻倍运算及可选的严格区间校验

mod errors;
mod operations;

pub use errors::ArithmeticError;
pub use operations::{double, square, DoubleRange, SQUARE_LIMIT};
