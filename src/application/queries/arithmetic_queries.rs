//! Arithmetic Queries

/// 平方查询
#[derive(Debug, Clone, Copy)]
pub struct SquareQuery {
    pub x: i64,
}

/// 翻倍查询
#[derive(Debug, Clone, Copy)]
pub struct DoubleQuery {
    pub x: i64,
    /// 为 true 时启用严格区间校验
    pub validated: bool,
}
