//! Root Handler

use axum::Json;

use crate::infrastructure::http::dto::MessageResponse;
use crate::infrastructure::http::error::ApiError;

/// 固定问候语
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World!!!",
    })
}

/// 未匹配任何路由
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
