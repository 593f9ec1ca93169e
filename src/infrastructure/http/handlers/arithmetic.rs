//! Arithmetic HTTP Handlers
//!
//! - GET /square/{x}
//! - GET /double/{x}?validated=<bool>
//! - GET /double?x=<int>&validated=<bool>

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{DoubleQuery, SquareQuery};
use crate::infrastructure::http::dto::ResultResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{
    missing, parse_bool, parse_int, path_segment, query_params, QueryParams, Source, Validator,
};
use crate::infrastructure::http::state::AppState;

/// 平方
pub async fn square(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ResultResponse<i64>>, ApiError> {
    let raw = path_segment(path)?;

    let mut validator = Validator::new();
    let x = validator.check(parse_int(Source::Path, "x", &raw));
    let x = validator.finish(x)?;

    let result = state.square_handler.handle(SquareQuery { x })?;
    Ok(Json(ResultResponse::new(result)))
}

/// 翻倍（x 来自路径）
pub async fn double_path(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ResultResponse<i128>>, ApiError> {
    let raw = path_segment(path)?;
    let params = query_params(query)?;

    let mut validator = Validator::new();
    let x = validator.check(parse_int(Source::Path, "x", &raw));
    let validated = validated_flag(&params, &mut validator);
    let (x, validated) = validator.finish(x.zip(validated))?;

    double(&state, x, validated)
}

/// 翻倍（x 来自查询参数）
pub async fn double_query(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ResultResponse<i128>>, ApiError> {
    let params = query_params(query)?;

    let mut validator = Validator::new();
    let x = match params.last("x") {
        Some(raw) => validator.check(parse_int(Source::Query, "x", raw)),
        None => {
            validator.push(missing(Source::Query, "x"));
            None
        }
    };
    let validated = validated_flag(&params, &mut validator);
    let (x, validated) = validator.finish(x.zip(validated))?;

    double(&state, x, validated)
}

/// `validated` 可选，缺省为 false
fn validated_flag(params: &QueryParams, validator: &mut Validator) -> Option<bool> {
    match params.last("validated") {
        Some(raw) => validator.check(parse_bool(Source::Query, "validated", raw)),
        None => Some(false),
    }
}

fn double(
    state: &AppState,
    x: i64,
    validated: bool,
) -> Result<Json<ResultResponse<i128>>, ApiError> {
    let result = state.double_handler.handle(DoubleQuery { x, validated })?;
    Ok(Json(ResultResponse::new(result)))
}
