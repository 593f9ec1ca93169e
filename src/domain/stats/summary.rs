//! Stats Context - Summary

use super::NumberList;

/// 列表统计结果
///
/// `total` 以 i128 累加，`average` 为实数除法。
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total: i128,
    pub average: f64,
    pub min: i64,
    pub max: i64,
}

impl Summary {
    pub fn of(numbers: &NumberList) -> Self {
        let values = numbers.as_slice();
        let count = values.len();
        let total: i128 = values.iter().copied().map(i128::from).sum();

        // NumberList 保证非空，首元素一定存在
        let first = values[0];
        let (min, max) = values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        Self {
            count,
            total,
            average: total as f64 / count as f64,
            min,
            max,
        }
    }
}

impl From<&NumberList> for Summary {
    fn from(numbers: &NumberList) -> Self {
        Self::of(numbers)
    }
}
