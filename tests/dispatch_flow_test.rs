//! 基于 SQLite 存储的端到端指派流程测试

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;

use respond_dispatcher::{
    DispatchEngine, FirstAvailableStrategy, IncidentIntake, NearestStrategy,
    NotificationOrchestrator, ResponderDirectory,
};
use respond_domain::entities::{NewReport, ResponderRole, SyncStatus};
use respond_domain::errors::DispatchError;
use respond_domain::repositories::{AssignmentRepository, ReportRepository, ResponderRepository};
use respond_infrastructure::{
    migrator, DataSeeder, SqliteAssignmentRepository, SqliteReportRepository,
    SqliteResponderRepository,
};

struct Stack {
    directory: Arc<ResponderDirectory>,
    intake: Arc<IncidentIntake>,
    engine: Arc<DispatchEngine>,
    orchestrator: NotificationOrchestrator,
}

async fn seeded_stack(nearest: bool) -> Stack {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    migrator().run(&pool).await.unwrap();

    let responders: Arc<dyn ResponderRepository> =
        Arc::new(SqliteResponderRepository::new(pool.clone()));
    let reports: Arc<dyn ReportRepository> = Arc::new(SqliteReportRepository::new(pool.clone()));
    let assignments: Arc<dyn AssignmentRepository> =
        Arc::new(SqliteAssignmentRepository::new(pool.clone()));

    DataSeeder::new(Arc::clone(&responders))
        .seed_responders()
        .await
        .unwrap();

    let directory = Arc::new(ResponderDirectory::new(responders));
    let intake = Arc::new(IncidentIntake::new(Arc::clone(&reports)));
    let engine = Arc::new(DispatchEngine::new(
        Arc::clone(&directory),
        reports,
        assignments,
        if nearest {
            Arc::new(NearestStrategy::new())
        } else {
            Arc::new(FirstAvailableStrategy::new())
        },
    ));
    let orchestrator = NotificationOrchestrator::new(Arc::clone(&engine), Arc::clone(&directory));

    Stack {
        directory,
        intake,
        engine,
        orchestrator,
    }
}

fn nairobi_report() -> NewReport {
    NewReport {
        kind: "ACCIDENT".to_string(),
        description: "Collision on Uhuru Highway".to_string(),
        location_lat: Some(-1.30),
        location_lng: Some(36.83),
        reporter_id: "citizen-42".to_string(),
    }
}

#[tokio::test]
async fn test_report_to_assignment_flow() {
    let stack = seeded_stack(false).await;

    let report = stack.intake.admit_report(nairobi_report()).await.unwrap();
    assert_eq!(report.status, "NEW");

    let assignment = stack.engine.assign(report.id).await.unwrap();

    // 种子数据中 id 1 是内罗毕的 James Mwangi，先到先得策略选中他
    assert_eq!(assignment.responder_id, 1);
    assert_eq!(assignment.eta_minutes, 3);
    assert_eq!(assignment.sync_status, SyncStatus::Pending);

    // 指派后人员被占用
    let responder = stack.directory.get(1).await.unwrap();
    assert!(!responder.availability);

    // 重复指派被唯一约束拒绝
    assert!(matches!(
        stack.engine.assign(report.id).await,
        Err(DispatchError::AlreadyAssigned { .. })
    ));
}

#[tokio::test]
async fn test_notification_flow_with_seeded_directory() {
    let stack = seeded_stack(false).await;

    let report = stack.intake.admit_report(nairobi_report()).await.unwrap();
    let notification = stack.orchestrator.notify(report.id).await.unwrap();

    assert_eq!(notification.responder_name, "James Mwangi");
    assert_eq!(notification.responder_role, ResponderRole::Medic);
    assert_eq!(notification.eta_minutes, 3);
}

#[tokio::test]
async fn test_nearest_strategy_over_seeded_directory() {
    let stack = seeded_stack(true).await;

    // 基苏木附近的事件应选中基苏木的消防员而非目录中的第一位
    let report = stack
        .intake
        .admit_report(NewReport {
            kind: "FIRE".to_string(),
            description: "Market fire".to_string(),
            location_lat: Some(-0.10),
            location_lng: Some(34.75),
            reporter_id: "citizen-77".to_string(),
        })
        .await
        .unwrap();

    let notification = stack.orchestrator.notify(report.id).await.unwrap();
    assert_eq!(notification.responder_name, "Peter Ochieng");
    assert_eq!(notification.responder_role, ResponderRole::Fire);
}

#[tokio::test]
async fn test_pool_exhaustion_across_reports() {
    let stack = seeded_stack(false).await;

    // 种子数据中只有 3 名可用人员
    for _ in 0..3 {
        let report = stack.intake.admit_report(nairobi_report()).await.unwrap();
        stack.engine.assign(report.id).await.unwrap();
    }

    let report = stack.intake.admit_report(nairobi_report()).await.unwrap();
    assert!(matches!(
        stack.engine.assign(report.id).await,
        Err(DispatchError::NoResponderAvailable)
    ));

    // 释放一名人员后恢复可指派
    stack.directory.release(1).await.unwrap();
    assert!(stack.engine.assign(report.id).await.is_ok());
}
