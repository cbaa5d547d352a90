use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use respond_domain::entities::EmergencyReport;
use respond_domain::errors::DispatchResult;
use respond_domain::repositories::ReportRepository;

pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_report(row: &sqlx::sqlite::SqliteRow) -> DispatchResult<EmergencyReport> {
        Ok(EmergencyReport {
            id: row.try_get("id")?,
            kind: row.try_get("kind")?,
            description: row.try_get("description")?,
            location_lat: row.try_get("location_lat")?,
            location_lng: row.try_get("location_lng")?,
            reported_at: row.try_get("reported_at")?,
            status: row.try_get("status")?,
            reporter_id: row.try_get("reporter_id")?,
        })
    }
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn create(&self, report: &EmergencyReport) -> DispatchResult<EmergencyReport> {
        let result = sqlx::query(
            r#"
            INSERT INTO emergency_reports (kind, description, location_lat, location_lng, reported_at, status, reporter_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&report.kind)
        .bind(&report.description)
        .bind(report.location_lat)
        .bind(report.location_lng)
        .bind(report.reported_at)
        .bind(&report.status)
        .bind(&report.reporter_id)
        .execute(&self.pool)
        .await?;

        let mut created = report.clone();
        created.id = result.last_insert_rowid();

        debug!("创建紧急报告成功: {} (报告人: {})", created.id, created.reporter_id);
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> DispatchResult<Option<EmergencyReport>> {
        let row = sqlx::query(
            "SELECT id, kind, description, location_lat, location_lng, reported_at, status, reporter_id FROM emergency_reports WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_report).transpose()
    }

    async fn list_by_reporter(&self, reporter_id: &str) -> DispatchResult<Vec<EmergencyReport>> {
        let rows = sqlx::query(
            "SELECT id, kind, description, location_lat, location_lng, reported_at, status, reporter_id FROM emergency_reports WHERE reporter_id = $1 ORDER BY id",
        )
        .bind(reporter_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_report).collect()
    }
}
