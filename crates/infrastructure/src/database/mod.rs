//! 数据库连接与仓储实现

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::info;

use respond_domain::errors::DispatchResult;

pub mod assignment_repository;
pub mod report_repository;
pub mod responder_repository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// 内嵌迁移集，启动时由应用执行
pub fn migrator() -> &'static Migrator {
    &MIGRATOR
}

/// 创建 SQLite 连接池
pub async fn create_pool(
    url: &str,
    max_connections: u32,
    connection_timeout_seconds: u64,
) -> DispatchResult<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(connection_timeout_seconds))
        .connect(url)
        .await?;

    info!("数据库连接池已建立: {} (最大连接数: {})", url, max_connections);
    Ok(pool)
}
