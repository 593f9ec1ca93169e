//! Request parameter extraction
//!
//! 路径与查询参数按字符串接收，再在此处解析为目标类型，
//! 解析失败统一收集为 [`ValidationIssue`]，一次性返回全部问题。

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};

use crate::infrastructure::http::error::{ApiError, LocItem, ValidationIssue};

const INT_PARSING_MSG: &str = "Input should be a valid integer, unable to parse string as an integer";
const BOOL_PARSING_MSG: &str = "Input should be a valid boolean, unable to interpret input";
const MISSING_MSG: &str = "Field required";

/// 参数来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Path,
    Query,
}

impl Source {
    fn as_str(&self) -> &'static str {
        match self {
            Source::Path => "path",
            Source::Query => "query",
        }
    }

    fn loc(&self, field: &'static str) -> Vec<LocItem> {
        vec![LocItem::Key(self.as_str()), LocItem::Key(field)]
    }
}

/// 解析整数参数
pub fn parse_int(source: Source, field: &'static str, raw: &str) -> Result<i64, ValidationIssue> {
    raw.parse::<i64>().map_err(|_| ValidationIssue {
        kind: "int_parsing",
        loc: source.loc(field),
        msg: INT_PARSING_MSG,
        input: Some(raw.to_string()),
    })
}

/// 解析布尔参数（大小写不敏感）
pub fn parse_bool(source: Source, field: &'static str, raw: &str) -> Result<bool, ValidationIssue> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(ValidationIssue {
            kind: "bool_parsing",
            loc: source.loc(field),
            msg: BOOL_PARSING_MSG,
            input: Some(raw.to_string()),
        }),
    }
}

/// 解析重复出现的整数参数，错误位置带上元素下标
pub fn parse_int_list(
    source: Source,
    field: &'static str,
    raw: &[&str],
    validator: &mut Validator,
) -> Vec<i64> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let parsed = value.parse::<i64>().map_err(|_| {
                let mut loc = source.loc(field);
                loc.push(LocItem::Index(index));
                ValidationIssue {
                    kind: "int_parsing",
                    loc,
                    msg: INT_PARSING_MSG,
                    input: Some(value.to_string()),
                }
            });
            validator.check(parsed)
        })
        .collect()
}

/// 必填参数缺失
pub fn missing(source: Source, field: &'static str) -> ValidationIssue {
    ValidationIssue {
        kind: "missing",
        loc: source.loc(field),
        msg: MISSING_MSG,
        input: None,
    }
}

/// 查询字符串中的全部键值对，保留重复键及其顺序
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// 单值参数：重复出现时取最后一个
    pub fn last(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 列表参数：按出现顺序返回全部值
    pub fn all(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

/// 接收原始查询串；查询串本身无法解码时返回 400
pub fn query_params(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<QueryParams, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(QueryParams::new(pairs))
}

/// 接收原始路径段
pub fn path_segment(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(segment) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(segment)
}

/// 校验问题收集器
#[derive(Debug, Default)]
pub struct Validator {
    issues: Vec<ValidationIssue>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录失败并返回 None；成功则原样返回值
    pub fn check<T>(&mut self, result: Result<T, ValidationIssue>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(issue) => {
                self.issues.push(issue);
                None
            }
        }
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// 存在任何问题时返回 422，否则返回已解析的值
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ApiError> {
        if !self.issues.is_empty() {
            return Err(ApiError::Validation(self.issues));
        }
        value.ok_or_else(|| ApiError::Internal("validated value missing".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(Source::Path, "x", "-42"), Ok(-42));
        let issue = parse_int(Source::Path, "x", "abc").unwrap_err();
        assert_eq!(issue.kind, "int_parsing");
        assert_eq!(issue.loc, vec![LocItem::Key("path"), LocItem::Key("x")]);
        assert_eq!(issue.input.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_int_rejects_overflow() {
        assert!(parse_int(Source::Query, "x", "9223372036854775808").is_err());
    }

    #[test]
    fn test_parse_bool_variants() {
        for raw in ["true", "True", "1", "yes", "on"] {
            assert_eq!(parse_bool(Source::Query, "validated", raw), Ok(true));
        }
        for raw in ["false", "FALSE", "0", "no", "off"] {
            assert_eq!(parse_bool(Source::Query, "validated", raw), Ok(false));
        }
        let issue = parse_bool(Source::Query, "validated", "maybe").unwrap_err();
        assert_eq!(issue.kind, "bool_parsing");
    }

    #[test]
    fn test_query_params_last_and_all() {
        let params = QueryParams::new(vec![
            ("numbers".into(), "1".into()),
            ("x".into(), "5".into()),
            ("numbers".into(), "2".into()),
        ]);
        assert_eq!(params.last("numbers"), Some("2"));
        assert_eq!(params.all("numbers"), vec!["1", "2"]);
        assert_eq!(params.last("validated"), None);
        assert!(params.all("missing").is_empty());
    }

    #[test]
    fn test_parse_int_list_reports_index() {
        let mut validator = Validator::new();
        let values = parse_int_list(Source::Query, "numbers", &["1", "x", "3"], &mut validator);
        assert_eq!(values, vec![1, 3]);

        match validator.finish(Some(values)) {
            Err(ApiError::Validation(issues)) => {
                assert_eq!(issues.len(), 1);
                assert_eq!(
                    issues[0].loc,
                    vec![
                        LocItem::Key("query"),
                        LocItem::Key("numbers"),
                        LocItem::Index(1)
                    ]
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validator_passes_value_through() {
        let mut validator = Validator::new();
        let x = validator.check(parse_int(Source::Path, "x", "7"));
        assert_eq!(validator.finish(x).unwrap(), 7);
    }
}
