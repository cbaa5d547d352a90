use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use respond_domain::entities::NewReport;

use crate::{error::ApiResult, response::created, response::success, routes::AppState};

/// 报告提交请求
#[derive(Debug, Deserialize)]
pub struct CreateAlertRequest {
    pub kind: String,
    pub description: String,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub reporter_id: String,
}

/// 提交紧急报告
pub async fn create_alert(
    State(state): State<AppState>,
    Json(request): Json<CreateAlertRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let report = state
        .intake
        .admit_report(NewReport {
            kind: request.kind,
            description: request.description,
            location_lat: request.location_lat,
            location_lng: request.location_lng,
            reporter_id: request.reporter_id,
        })
        .await?;

    Ok(created(report))
}

/// 查询单条报告
pub async fn get_alert(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let report = state.intake.get_report(id).await?;
    Ok(success(report))
}

/// 为报告指派响应人员并返回通知载荷
pub async fn assign_alert(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let notification = state.orchestrator.notify(id).await?;
    Ok(created(notification))
}

/// 按报告人查询历史报告
pub async fn list_alerts_by_reporter(
    State(state): State<AppState>,
    Path(reporter_id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let reports = state.intake.reports_by_reporter(&reporter_id).await?;
    Ok(success(reports))
}
