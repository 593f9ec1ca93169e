//! Stats Context - Value Objects

use super::StatsError;

/// 元素分隔符
const DELIMITER: char = ',';

/// 非空整数列表
///
/// 不变量:
/// - 至少包含一个元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberList(Vec<i64>);

impl NumberList {
    /// 由已解析的值构造
    pub fn new(values: Vec<i64>) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::Empty);
        }
        Ok(Self(values))
    }

    /// 解析逗号分隔字符串，例如 `"1, 2,3"`
    ///
    /// 每个元素去除首尾空白后按整数解析，任一元素失败则整体失败。
    pub fn parse_delimited(raw: &str) -> Result<Self, StatsError> {
        let values = raw
            .split(DELIMITER)
            .map(parse_element)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values)
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 永远为 false，保留以配合 `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn parse_element(raw: &str) -> Result<i64, StatsError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| StatsError::InvalidNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimited_trims_whitespace() {
        let list = NumberList::parse_delimited(" 1, 2 ,3 ").unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_parse_delimited_accepts_signs() {
        let list = NumberList::parse_delimited("-5,+7").unwrap();
        assert_eq!(list.as_slice(), &[-5, 7]);
    }

    #[test]
    fn test_parse_delimited_rejects_non_integer() {
        assert_eq!(
            NumberList::parse_delimited("a,2"),
            Err(StatsError::InvalidNumber("a".to_string()))
        );
        assert!(NumberList::parse_delimited("1.5").is_err());
    }

    #[test]
    fn test_parse_delimited_rejects_empty_element() {
        // 空字符串切分后得到一个空元素，按格式错误处理
        assert!(matches!(
            NumberList::parse_delimited(""),
            Err(StatsError::InvalidNumber(_))
        ));
        assert!(matches!(
            NumberList::parse_delimited("1,,2"),
            Err(StatsError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(NumberList::new(Vec::new()), Err(StatsError::Empty));
        assert_eq!(
            StatsError::Empty.to_string(),
            "numbers must not be empty"
        );
    }
}
