use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use respond_domain::entities::{NewResponder, ResponderRole};

use crate::{error::ApiResult, response::created, response::success, routes::AppState};

/// 响应人员准入请求
#[derive(Debug, Deserialize)]
pub struct CreateResponderRequest {
    pub name: String,
    pub role: ResponderRole,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,
    pub availability: Option<bool>,
}

/// 位置上报请求
#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    pub lat: f64,
    pub lng: f64,
}

/// 获取响应人员列表
pub async fn list_responders(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let responders = state.directory.list_all().await?;
    Ok(success(responders))
}

/// 准入一名响应人员
pub async fn create_responder(
    State(state): State<AppState>,
    Json(request): Json<CreateResponderRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let responder = state
        .directory
        .create(NewResponder {
            name: request.name,
            role: request.role,
            current_lat: request.current_lat,
            current_lng: request.current_lng,
            availability: request.availability,
        })
        .await?;

    Ok(created(responder))
}

/// 获取单个响应人员
pub async fn get_responder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let responder = state.directory.get(id).await?;
    Ok(success(responder))
}

/// 更新响应人员位置，不改变可用性
pub async fn update_responder_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateLocationRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let responder = state
        .directory
        .update_location(id, request.lat, request.lng)
        .await?;
    Ok(success(responder))
}
