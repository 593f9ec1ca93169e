//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Arithmetic Context: 单值运算（平方、翻倍）
//! - Stats Context: 整数列表统计

pub mod arithmetic;
pub mod stats;

pub use arithmetic::{double, square, ArithmeticError, DoubleRange, SQUARE_LIMIT};
pub use stats::{NumberList, StatsError, Summary};
