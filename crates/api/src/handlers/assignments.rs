use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::{error::ApiResult, response::created, response::success, routes::AppState};

/// 指派请求参数
#[derive(Debug, Deserialize)]
pub struct AssignQueryParams {
    pub emergency_id: i64,
}

/// 为指定紧急事件创建指派
pub async fn create_assignment(
    State(state): State<AppState>,
    Query(params): Query<AssignQueryParams>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let assignment = state.engine.assign(params.emergency_id).await?;
    Ok(created(assignment))
}

/// 查询单条指派记录
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let assignment = state.engine.get_assignment(id).await?;
    Ok(success(assignment))
}

/// 按紧急事件查询指派记录
pub async fn get_assignment_by_emergency(
    State(state): State<AppState>,
    Path(emergency_id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let assignment = state.engine.assignment_for_emergency(emergency_id).await?;
    Ok(success(assignment))
}
