use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use respond_domain::errors::DispatchError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("调度错误: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("请求参数错误: {0}")]
    BadRequest(String),

    #[error("内部服务器错误: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_type) = match &self {
            ApiError::Dispatch(DispatchError::ReportNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("紧急报告 ID {} 不存在", id),
                "REPORT_NOT_FOUND",
            ),
            ApiError::Dispatch(DispatchError::ResponderNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("响应人员 ID {} 不存在", id),
                "RESPONDER_NOT_FOUND",
            ),
            ApiError::Dispatch(DispatchError::AssignmentNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("指派记录 ID {} 不存在", id),
                "ASSIGNMENT_NOT_FOUND",
            ),
            ApiError::Dispatch(DispatchError::RejectedReporter(msg)) => (
                StatusCode::BAD_REQUEST,
                format!("报告人无效: {}", msg),
                "REJECTED_REPORTER",
            ),
            ApiError::Dispatch(DispatchError::NoResponderAvailable) => (
                StatusCode::CONFLICT,
                "当前没有可用的响应人员".to_string(),
                "NO_RESPONDER_AVAILABLE",
            ),
            ApiError::Dispatch(DispatchError::AlreadyAssigned { emergency_id }) => (
                StatusCode::CONFLICT,
                format!("紧急事件 {} 已有指派", emergency_id),
                "ALREADY_ASSIGNED",
            ),
            ApiError::Dispatch(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "系统内部错误".to_string(),
                "INTERNAL_ERROR",
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                format!("请求参数错误: {}", msg),
                "BAD_REQUEST",
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "系统内部错误".to_string(),
                "INTERNAL_ERROR",
            ),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type,
                "code": status.as_u16(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
