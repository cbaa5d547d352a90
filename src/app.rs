use std::sync::Arc;

use anyhow::{Context, Result};
use respond_api::{create_app, AppState};
use respond_config::AppConfig;
use respond_dispatcher::{
    strategy_by_name, DispatchEngine, IncidentIntake, NotificationOrchestrator, ResponderDirectory,
};
use respond_domain::repositories::{AssignmentRepository, ReportRepository, ResponderRepository};
use respond_infrastructure::{
    create_pool, migrator, DataSeeder, SqliteAssignmentRepository, SqliteReportRepository,
    SqliteResponderRepository,
};
use tokio::{net::TcpListener, sync::broadcast};
use tracing::{error, info};

/// 主应用程序：装配存储、调度组件与 HTTP 服务
pub struct Application {
    config: AppConfig,
    state: AppState,
}

impl Application {
    /// 创建新的应用实例：建池、迁移、种子数据、装配各组件
    pub async fn new(config: AppConfig) -> Result<Self> {
        info!("初始化应用程序");

        let pool = create_pool(
            &config.database.url,
            config.database.max_connections,
            config.database.connection_timeout_seconds,
        )
        .await
        .context("创建数据库连接池失败")?;

        migrator().run(&pool).await.context("执行数据库迁移失败")?;

        let responders: Arc<dyn ResponderRepository> =
            Arc::new(SqliteResponderRepository::new(pool.clone()));
        let reports: Arc<dyn ReportRepository> = Arc::new(SqliteReportRepository::new(pool.clone()));
        let assignments: Arc<dyn AssignmentRepository> =
            Arc::new(SqliteAssignmentRepository::new(pool.clone()));

        if config.dispatcher.seed_demo_data {
            DataSeeder::new(Arc::clone(&responders))
                .seed_responders()
                .await
                .context("写入演示数据失败")?;
        }

        let strategy = strategy_by_name(&config.dispatcher.strategy).with_context(|| {
            format!("未知的指派策略: {}", config.dispatcher.strategy)
        })?;
        info!("指派策略: {}", strategy.name());

        let directory = Arc::new(ResponderDirectory::new(Arc::clone(&responders)));
        let intake = Arc::new(IncidentIntake::new(Arc::clone(&reports)));
        let engine = Arc::new(DispatchEngine::new(
            Arc::clone(&directory),
            reports,
            assignments,
            strategy,
        ));
        let orchestrator = Arc::new(NotificationOrchestrator::new(
            Arc::clone(&engine),
            Arc::clone(&directory),
        ));

        Ok(Self {
            config,
            state: AppState {
                intake,
                directory,
                engine,
                orchestrator,
            },
        })
    }

    /// 运行HTTP服务直到收到关闭信号
    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let app = create_app(self.state.clone(), self.config.api.cors_enabled);

        let listener = TcpListener::bind(&self.config.api.bind_address)
            .await
            .with_context(|| format!("绑定地址失败: {}", self.config.api.bind_address))?;

        info!("API服务器启动在 http://{}", self.config.api.bind_address);

        let server_handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app.into_make_service()).await {
                error!("API服务器运行失败: {}", e);
            }
        });

        // 等待关闭信号
        let _ = shutdown_rx.recv().await;
        info!("API服务器收到关闭信号");

        server_handle.abort();

        info!("API服务器已停止");
        Ok(())
    }
}
