//! Stats HTTP Handlers
//!
//! - GET /stats/{numbers}            逗号分隔
//! - GET /stats?numbers=1&numbers=2  重复查询参数

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::StatsQuery;
use crate::infrastructure::http::dto::StatsResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{
    missing, parse_int_list, path_segment, query_params, Source, Validator,
};
use crate::infrastructure::http::state::AppState;

/// 统计（逗号分隔路径段）
///
/// 元素格式错误与空列表都由应用层返回 400
pub async fn stats_path(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StatsResponse>, ApiError> {
    let raw = path_segment(path)?;
    let result = state.stats_handler.handle(StatsQuery::Delimited(raw))?;
    Ok(Json(result.into()))
}

/// 统计（重复查询参数）
///
/// 参数缺失或元素不是整数时在参数校验层返回 422
pub async fn stats_query(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<StatsResponse>, ApiError> {
    let params = query_params(query)?;
    let raw = params.all("numbers");

    let mut validator = Validator::new();
    if raw.is_empty() {
        validator.push(missing(Source::Query, "numbers"));
    }
    let values = parse_int_list(Source::Query, "numbers", &raw, &mut validator);
    let values = validator.finish(Some(values))?;

    let result = state.stats_handler.handle(StatsQuery::Values(values))?;
    Ok(Json(result.into()))
}
