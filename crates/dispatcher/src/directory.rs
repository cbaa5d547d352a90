use std::sync::Arc;

use tracing::{debug, info};

use respond_domain::entities::{NewResponder, Responder};
use respond_domain::errors::{DispatchError, DispatchResult};
use respond_domain::repositories::ResponderRepository;

/// 响应人员目录：唯一持有 responders 写入权的组件
pub struct ResponderDirectory {
    repo: Arc<dyn ResponderRepository>,
}

impl ResponderDirectory {
    pub fn new(repo: Arc<dyn ResponderRepository>) -> Self {
        Self { repo }
    }

    /// 当前可用人员；单次调用内顺序稳定，顺序本身不承载语义
    pub async fn list_available(&self) -> DispatchResult<Vec<Responder>> {
        self.repo.list_available().await
    }

    pub async fn list_all(&self) -> DispatchResult<Vec<Responder>> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> DispatchResult<Responder> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DispatchError::ResponderNotFound { id })
    }

    /// 准入一名响应人员；availability 未指定时默认 true
    pub async fn create(&self, input: NewResponder) -> DispatchResult<Responder> {
        let responder = Responder {
            id: 0,
            name: input.name,
            role: input.role,
            current_lat: input.current_lat,
            current_lng: input.current_lng,
            availability: input.availability.unwrap_or(true),
        };
        let created = self.repo.create(&responder).await?;
        info!("准入响应人员: {}", created.entity_description());
        Ok(created)
    }

    /// 覆盖坐标；不改变可用性
    pub async fn update_location(&self, id: i64, lat: f64, lng: f64) -> DispatchResult<Responder> {
        let updated = self.repo.update_location(id, lat, lng).await?;
        debug!("更新响应人员 {} 位置: ({}, {})", id, lat, lng);
        Ok(updated)
    }

    /// 可用→占用 的原子转移；与选派在引擎侧构成不可分的一步
    pub async fn reserve(&self, id: i64) -> DispatchResult<bool> {
        self.repo.reserve(id).await
    }

    /// 回退占用，仅用于指派落库失败后的恢复
    pub async fn release(&self, id: i64) -> DispatchResult<()> {
        self.repo.release(id).await
    }
}
