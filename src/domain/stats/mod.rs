//! Stats Context - 列表统计限界上下文
//!
//! 职责:
//! - 整数列表的解析与非空约束
//! - count / total / average / min / max 汇总

mod errors;
mod summary;
mod value_objects;

pub use errors::StatsError;
pub use summary::Summary;
pub use value_objects::NumberList;
