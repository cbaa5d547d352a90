use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use respond_dispatcher::{
    DispatchEngine, IncidentIntake, NotificationOrchestrator, ResponderDirectory,
};

use crate::handlers::{
    alerts::{assign_alert, create_alert, get_alert, list_alerts_by_reporter},
    assignments::{create_assignment, get_assignment, get_assignment_by_emergency},
    health::health_check,
    responders::{create_responder, get_responder, list_responders, update_responder_location},
};

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub intake: Arc<IncidentIntake>,
    pub directory: Arc<ResponderDirectory>,
    pub engine: Arc<DispatchEngine>,
    pub orchestrator: Arc<NotificationOrchestrator>,
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 紧急报告API
        .route("/alerts", post(create_alert))
        .route("/alerts/{id}", get(get_alert))
        .route("/alerts/{id}/assign", post(assign_alert))
        .route("/alerts/reporter/{reporter_id}", get(list_alerts_by_reporter))
        // 指派API
        .route("/assign", post(create_assignment))
        .route("/assign/{id}", get(get_assignment))
        .route("/assign/emergency/{emergency_id}", get(get_assignment_by_emergency))
        // 响应人员API
        .route("/responders", get(list_responders).post(create_responder))
        .route("/responders/{id}", get(get_responder))
        .route("/responders/{id}/location", patch(update_responder_location))
        .with_state(state)
}

/// 创建完整应用，挂载请求日志与可选的 CORS 层
pub fn create_app(state: AppState, cors_enabled: bool) -> Router {
    let mut app = create_routes(state).layer(TraceLayer::new_for_http());
    if cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }
    app
}
