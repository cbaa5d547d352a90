use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use respond_domain::entities::Responder;
use respond_domain::errors::{DispatchError, DispatchResult};
use respond_domain::repositories::ResponderRepository;

pub struct SqliteResponderRepository {
    pool: SqlitePool,
}

impl SqliteResponderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_responder(row: &sqlx::sqlite::SqliteRow) -> DispatchResult<Responder> {
        Ok(Responder {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            role: row.try_get("role")?,
            current_lat: row.try_get("current_lat")?,
            current_lng: row.try_get("current_lng")?,
            availability: row.try_get("availability")?,
        })
    }
}

#[async_trait]
impl ResponderRepository for SqliteResponderRepository {
    async fn create(&self, responder: &Responder) -> DispatchResult<Responder> {
        let result = sqlx::query(
            r#"
            INSERT INTO responders (name, role, current_lat, current_lng, availability)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&responder.name)
        .bind(responder.role)
        .bind(responder.current_lat)
        .bind(responder.current_lng)
        .bind(responder.availability)
        .execute(&self.pool)
        .await?;

        let mut created = responder.clone();
        created.id = result.last_insert_rowid();

        debug!("创建响应人员成功: {}", created.entity_description());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> DispatchResult<Option<Responder>> {
        let row = sqlx::query(
            "SELECT id, name, role, current_lat, current_lng, availability FROM responders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_responder).transpose()
    }

    async fn list(&self) -> DispatchResult<Vec<Responder>> {
        let rows = sqlx::query(
            "SELECT id, name, role, current_lat, current_lng, availability FROM responders ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_responder).collect()
    }

    async fn list_available(&self) -> DispatchResult<Vec<Responder>> {
        let rows = sqlx::query(
            "SELECT id, name, role, current_lat, current_lng, availability FROM responders WHERE availability = 1 ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_responder).collect()
    }

    async fn update_location(&self, id: i64, lat: f64, lng: f64) -> DispatchResult<Responder> {
        let result = sqlx::query(
            "UPDATE responders SET current_lat = $2, current_lng = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(lat)
        .bind(lng)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DispatchError::ResponderNotFound { id });
        }

        debug!("更新响应人员 {} 位置成功: ({}, {})", id, lat, lng);
        self.get_by_id(id)
            .await?
            .ok_or(DispatchError::ResponderNotFound { id })
    }

    async fn reserve(&self, id: i64) -> DispatchResult<bool> {
        // 条件更新保证 可用→占用 的原子性，并发抢占只有一方成功
        let result = sqlx::query(
            "UPDATE responders SET availability = 0 WHERE id = $1 AND availability = 1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            debug!("占用响应人员 {} 成功", id);
            return Ok(true);
        }

        // 区分 已被占用 与 人员不存在
        match self.get_by_id(id).await? {
            Some(_) => Ok(false),
            None => Err(DispatchError::ResponderNotFound { id }),
        }
    }

    async fn release(&self, id: i64) -> DispatchResult<()> {
        sqlx::query("UPDATE responders SET availability = 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("释放响应人员 {} 成功", id);
        Ok(())
    }
}
