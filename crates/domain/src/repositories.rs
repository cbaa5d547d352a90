//! 领域仓储抽象
//!
//! 定义数据访问的抽象接口，遵循依赖倒置原则。每类实体只有一个写入方：
//! 响应人员目录写 responders，事件接收写 reports，调度引擎写 assignments。

use async_trait::async_trait;

use crate::entities::{Assignment, EmergencyReport, Responder};
use crate::errors::DispatchResult;

/// 响应人员仓储抽象
#[async_trait]
pub trait ResponderRepository: Send + Sync {
    /// 持久化一名响应人员并返回带数据库生成 id 的记录
    async fn create(&self, responder: &Responder) -> DispatchResult<Responder>;
    async fn get_by_id(&self, id: i64) -> DispatchResult<Option<Responder>>;
    async fn list(&self) -> DispatchResult<Vec<Responder>>;
    async fn list_available(&self) -> DispatchResult<Vec<Responder>>;
    /// 覆盖当前坐标；id 未知时返回 ResponderNotFound，不影响可用性
    async fn update_location(&self, id: i64, lat: f64, lng: f64) -> DispatchResult<Responder>;
    /// 原子的 可用→占用 转移；仅当当前可用时成功，返回是否抢到
    async fn reserve(&self, id: i64) -> DispatchResult<bool>;
    /// 释放占用（指派落库失败时回退用）
    async fn release(&self, id: i64) -> DispatchResult<()>;
}

/// 紧急报告仓储抽象
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn create(&self, report: &EmergencyReport) -> DispatchResult<EmergencyReport>;
    async fn get_by_id(&self, id: i64) -> DispatchResult<Option<EmergencyReport>>;
    /// 按报告人查询；无记录时返回空序列而非错误
    async fn list_by_reporter(&self, reporter_id: &str) -> DispatchResult<Vec<EmergencyReport>>;
}

/// 指派记录仓储抽象
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// 持久化指派；同一紧急事件已存在指派时返回 AlreadyAssigned
    async fn create(&self, assignment: &Assignment) -> DispatchResult<Assignment>;
    async fn get_by_id(&self, id: i64) -> DispatchResult<Option<Assignment>>;
    async fn get_by_emergency(&self, emergency_id: i64) -> DispatchResult<Option<Assignment>>;
}
