//! Arithmetic Context - Operations

use super::ArithmeticError;

/// 平方运算允许的最大幅值
///
/// 10000² 远小于 i64::MAX，上限内的乘法不会溢出
pub const SQUARE_LIMIT: i64 = 10_000;

/// 翻倍运算的严格校验区间（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleRange {
    pub min: i64,
    pub max: i64,
}

impl DoubleRange {
    pub const STRICT: Self = Self { min: -100, max: 100 };

    pub fn contains(&self, x: i64) -> bool {
        (self.min..=self.max).contains(&x)
    }
}

impl Default for DoubleRange {
    fn default() -> Self {
        Self::STRICT
    }
}

/// 计算 x²，|x| > SQUARE_LIMIT 时拒绝
pub fn square(x: i64) -> Result<i64, ArithmeticError> {
    if x.unsigned_abs() > SQUARE_LIMIT.unsigned_abs() {
        return Err(ArithmeticError::TooLarge(x));
    }
    Ok(x * x)
}

/// 计算 2x
///
/// `validated` 为 true 时要求 x 落在 [`DoubleRange::STRICT`] 内。
/// 结果使用 i128，任意 i64 输入都不会溢出。
pub fn double(x: i64, validated: bool) -> Result<i128, ArithmeticError> {
    let range = DoubleRange::STRICT;
    if validated && !range.contains(x) {
        return Err(ArithmeticError::OutOfRange {
            value: x,
            min: range.min,
            max: range.max,
        });
    }
    Ok(i128::from(x) * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_within_limit() {
        assert_eq!(square(3), Ok(9));
        assert_eq!(square(-4), Ok(16));
        assert_eq!(square(0), Ok(0));
        assert_eq!(square(SQUARE_LIMIT), Ok(100_000_000));
        assert_eq!(square(-SQUARE_LIMIT), Ok(100_000_000));
    }

    #[test]
    fn test_square_rejects_large_magnitude() {
        assert_eq!(square(10_001), Err(ArithmeticError::TooLarge(10_001)));
        assert_eq!(square(-10_001), Err(ArithmeticError::TooLarge(-10_001)));
        // i64::MIN 取绝对值不能溢出
        assert_eq!(square(i64::MIN), Err(ArithmeticError::TooLarge(i64::MIN)));
    }

    #[test]
    fn test_square_error_message() {
        assert_eq!(square(20_000).unwrap_err().to_string(), "x is too large");
    }

    #[test]
    fn test_double_without_validation() {
        assert_eq!(double(8, false), Ok(16));
        assert_eq!(double(-101, false), Ok(-202));
        assert_eq!(double(i64::MAX, false), Ok(i128::from(i64::MAX) * 2));
        assert_eq!(double(i64::MIN, false), Ok(i128::from(i64::MIN) * 2));
    }

    #[test]
    fn test_double_validated_bounds_inclusive() {
        assert_eq!(double(100, true), Ok(200));
        assert_eq!(double(-100, true), Ok(-200));
        assert_eq!(double(10, true), Ok(20));
    }

    #[test]
    fn test_double_validated_out_of_range() {
        let err = double(101, true).unwrap_err();
        assert_eq!(
            err,
            ArithmeticError::OutOfRange {
                value: 101,
                min: -100,
                max: 100
            }
        );
        assert_eq!(err.to_string(), "x out of allowed range (-100, 100)");
        assert!(double(-101, true).is_err());
    }
}
