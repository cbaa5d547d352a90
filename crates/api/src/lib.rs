//! HTTP API 层
//!
//! 基于 axum 暴露报告接收、人员目录与指派的 REST 接口。

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{create_app, create_routes, AppState};
