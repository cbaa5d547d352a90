use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use respond_domain::entities::{Assignment, NewReport, Responder, ResponderRole, SyncStatus};
use respond_domain::errors::DispatchError;
use respond_domain::repositories::{AssignmentRepository, ReportRepository, ResponderRepository};
use respond_infrastructure::{
    migrator, SqliteAssignmentRepository, SqliteReportRepository, SqliteResponderRepository,
};

async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    migrator().run(&pool).await.unwrap();
    pool
}

fn medic(name: &str) -> Responder {
    Responder {
        id: 0,
        name: name.to_string(),
        role: ResponderRole::Medic,
        current_lat: Some(-1.2921),
        current_lng: Some(36.8219),
        availability: true,
    }
}

#[tokio::test]
async fn test_responder_create_and_get_round_trip() {
    let repo = SqliteResponderRepository::new(setup_pool().await);

    let created = repo.create(&medic("James Mwangi")).await.unwrap();
    assert!(created.id > 0);

    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "James Mwangi");
    assert_eq!(fetched.role, ResponderRole::Medic);
    assert_eq!(fetched.location(), Some((-1.2921, 36.8219)));
    assert!(fetched.availability);

    assert!(repo.get_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_responder_without_location_round_trips_none() {
    let repo = SqliteResponderRepository::new(setup_pool().await);

    let mut input = medic("Grace Wanjiku");
    input.current_lat = None;
    input.current_lng = None;
    input.availability = false;

    let created = repo.create(&input).await.unwrap();
    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert!(fetched.location().is_none());
    assert!(!fetched.availability);
}

#[tokio::test]
async fn test_responder_list_available_filters_and_orders() {
    let repo = SqliteResponderRepository::new(setup_pool().await);

    let first = repo.create(&medic("James Mwangi")).await.unwrap();
    let mut busy = medic("Grace Wanjiku");
    busy.availability = false;
    repo.create(&busy).await.unwrap();
    let third = repo.create(&medic("Peter Ochieng")).await.unwrap();

    assert_eq!(repo.list().await.unwrap().len(), 3);

    let available = repo.list_available().await.unwrap();
    assert_eq!(
        available.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![first.id, third.id]
    );
}

#[tokio::test]
async fn test_responder_update_location() {
    let repo = SqliteResponderRepository::new(setup_pool().await);
    let created = repo.create(&medic("James Mwangi")).await.unwrap();

    let updated = repo.update_location(created.id, -1.10, 36.90).await.unwrap();
    assert_eq!(updated.location(), Some((-1.10, 36.90)));
    assert!(updated.availability);

    assert!(matches!(
        repo.update_location(999, 0.0, 0.0).await,
        Err(DispatchError::ResponderNotFound { id: 999 })
    ));
}

#[tokio::test]
async fn test_responder_reserve_is_a_one_shot_transition() {
    let repo = SqliteResponderRepository::new(setup_pool().await);
    let created = repo.create(&medic("James Mwangi")).await.unwrap();

    assert!(repo.reserve(created.id).await.unwrap());
    // 第二次抢占失败但不是错误
    assert!(!repo.reserve(created.id).await.unwrap());
    assert!(!repo.get_by_id(created.id).await.unwrap().unwrap().availability);

    repo.release(created.id).await.unwrap();
    assert!(repo.reserve(created.id).await.unwrap());

    assert!(matches!(
        repo.reserve(999).await,
        Err(DispatchError::ResponderNotFound { id: 999 })
    ));
}

#[tokio::test]
async fn test_report_create_and_lookup() {
    let repo = SqliteReportRepository::new(setup_pool().await);

    let report = NewReport {
        kind: "FIRE".to_string(),
        description: "Warehouse fire on Moi Avenue".to_string(),
        location_lat: Some(-1.2833),
        location_lng: Some(36.8167),
        reporter_id: "citizen-42".to_string(),
    }
    .into_report();

    let created = repo.create(&report).await.unwrap();
    assert!(created.id > 0);

    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.kind, "FIRE");
    assert_eq!(fetched.status, "NEW");
    assert_eq!(fetched.reported_at, report.reported_at);
    assert_eq!(fetched.reporter_id, "citizen-42");
}

#[tokio::test]
async fn test_report_list_by_reporter() {
    let repo = SqliteReportRepository::new(setup_pool().await);

    for reporter in ["citizen-42", "citizen-42", "citizen-77"] {
        let report = NewReport {
            kind: "ACCIDENT".to_string(),
            description: "Collision".to_string(),
            location_lat: None,
            location_lng: None,
            reporter_id: reporter.to_string(),
        }
        .into_report();
        repo.create(&report).await.unwrap();
    }

    let reports = repo.list_by_reporter("citizen-42").await.unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.reporter_id == "citizen-42"));

    assert!(repo.list_by_reporter("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_assignment_create_and_lookups() {
    let repo = SqliteAssignmentRepository::new(setup_pool().await);

    let created = repo.create(&Assignment::new(10, 1, 3)).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.sync_status, SyncStatus::Pending);

    let by_id = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.emergency_id, 10);
    assert_eq!(by_id.eta_minutes, 3);
    assert_eq!(by_id.assigned_at, created.assigned_at);

    let by_emergency = repo.get_by_emergency(10).await.unwrap().unwrap();
    assert_eq!(by_emergency.id, created.id);

    assert!(repo.get_by_id(999).await.unwrap().is_none());
    assert!(repo.get_by_emergency(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_assignment_unique_per_emergency() {
    let repo = SqliteAssignmentRepository::new(setup_pool().await);

    repo.create(&Assignment::new(10, 1, 3)).await.unwrap();
    let second = repo.create(&Assignment::new(10, 2, 5)).await;

    assert!(matches!(
        second,
        Err(DispatchError::AlreadyAssigned { emergency_id: 10 })
    ));

    // 其他事件不受影响
    assert!(repo.create(&Assignment::new(11, 2, 5)).await.is_ok());
}
