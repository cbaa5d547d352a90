use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use respond_domain::entities::Assignment;
use respond_domain::errors::{DispatchError, DispatchResult};
use respond_domain::repositories::AssignmentRepository;

pub struct SqliteAssignmentRepository {
    pool: SqlitePool,
}

impl SqliteAssignmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_assignment(row: &sqlx::sqlite::SqliteRow) -> DispatchResult<Assignment> {
        Ok(Assignment {
            id: row.try_get("id")?,
            emergency_id: row.try_get("emergency_id")?,
            responder_id: row.try_get("responder_id")?,
            eta_minutes: row.try_get("eta_minutes")?,
            assigned_at: row.try_get("assigned_at")?,
            sync_status: row.try_get("sync_status")?,
        })
    }
}

#[async_trait]
impl AssignmentRepository for SqliteAssignmentRepository {
    async fn create(&self, assignment: &Assignment) -> DispatchResult<Assignment> {
        let result = sqlx::query(
            r#"
            INSERT INTO assignments (emergency_id, responder_id, eta_minutes, assigned_at, sync_status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(assignment.emergency_id)
        .bind(assignment.responder_id)
        .bind(assignment.eta_minutes)
        .bind(assignment.assigned_at)
        .bind(assignment.sync_status)
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            // emergency_id 唯一索引兜住并发重复指派
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(DispatchError::AlreadyAssigned {
                    emergency_id: assignment.emergency_id,
                });
            }
            Err(err) => return Err(err.into()),
        };

        let mut created = assignment.clone();
        created.id = result.last_insert_rowid();

        debug!(
            "创建指派成功: {} (事件: {}, 响应人员: {})",
            created.id, created.emergency_id, created.responder_id
        );
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> DispatchResult<Option<Assignment>> {
        let row = sqlx::query(
            "SELECT id, emergency_id, responder_id, eta_minutes, assigned_at, sync_status FROM assignments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_assignment).transpose()
    }

    async fn get_by_emergency(&self, emergency_id: i64) -> DispatchResult<Option<Assignment>> {
        let row = sqlx::query(
            "SELECT id, emergency_id, responder_id, eta_minutes, assigned_at, sync_status FROM assignments WHERE emergency_id = $1",
        )
        .bind(emergency_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_assignment).transpose()
    }
}
