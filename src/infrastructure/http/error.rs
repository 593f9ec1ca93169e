//! HTTP Error Handling
//!
//! 错误响应体统一使用 `detail` 字段：
//! - 业务错误: `{"detail": "<message>"}`
//! - 参数校验错误: `{"detail": [{"type", "loc", "msg", "input"}, ...]}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 业务错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// 校验错误位置中的一段：字段名或列表下标
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocItem {
    Key(&'static str),
    Index(usize),
}

/// 单个参数校验失败
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<LocItem>,
    pub msg: &'static str,
    pub input: Option<String>,
}

/// 参数校验错误响应格式
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationIssue>,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unprocessable(String),
    Validation(Vec<ValidationIssue>),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(issues) => {
                tracing::warn!(issues = issues.len(), "Request validation failed");
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrorResponse { detail: issues }),
                )
                    .into_response();
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = 400, error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Unprocessable(msg) => {
                tracing::warn!(status = 422, error = %msg, "Unprocessable entity");
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(status = 404, error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = 500, error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::BadRequest(msg) => ApiError::BadRequest(msg),
            ApplicationError::Unprocessable(msg) => ApiError::Unprocessable(msg),
        }
    }
}
