//! Stats Queries

/// 列表统计查询
///
/// 两种编码方式对应同一个逻辑输入
#[derive(Debug, Clone)]
pub enum StatsQuery {
    /// 逗号分隔的原始字符串，例如 `1,2,3`
    Delimited(String),
    /// 已逐个解析的值（重复查询参数）
    Values(Vec<i64>),
}
