use std::sync::Arc;

use tracing::{debug, info, warn};

use respond_domain::entities::{Assignment, Responder};
use respond_domain::errors::{DispatchError, DispatchResult};
use respond_domain::repositories::{AssignmentRepository, ReportRepository};

use crate::directory::ResponderDirectory;
use crate::eta;
use crate::strategies::DispatchStrategy;

/// 指派引擎：唯一持有 assignments 写入权的组件
///
/// assign 是一次同步的 读取-决策-写入 流程，无重试。选中与占用通过目录的
/// 原子转移合为一步，同一事件的重复指派由存储层唯一约束兜底。
pub struct DispatchEngine {
    directory: Arc<ResponderDirectory>,
    reports: Arc<dyn ReportRepository>,
    assignments: Arc<dyn AssignmentRepository>,
    strategy: Arc<dyn DispatchStrategy>,
}

impl DispatchEngine {
    pub fn new(
        directory: Arc<ResponderDirectory>,
        reports: Arc<dyn ReportRepository>,
        assignments: Arc<dyn AssignmentRepository>,
        strategy: Arc<dyn DispatchStrategy>,
    ) -> Self {
        Self {
            directory,
            reports,
            assignments,
            strategy,
        }
    }

    /// 为紧急事件指派一名响应人员并落库
    pub async fn assign(&self, emergency_id: i64) -> DispatchResult<Assignment> {
        let report = self
            .reports
            .get_by_id(emergency_id)
            .await?
            .ok_or(DispatchError::ReportNotFound { id: emergency_id })?;

        if self.assignments.get_by_emergency(emergency_id).await?.is_some() {
            debug!("紧急事件 {} 已有指派，拒绝重复指派", emergency_id);
            return Err(DispatchError::AlreadyAssigned { emergency_id });
        }

        let mut candidates = self.directory.list_available().await?;
        let chosen = self.select_and_reserve(&mut candidates, report.location()).await?;

        let eta_minutes = eta::estimate(chosen.location(), report.location());
        let assignment = Assignment::new(emergency_id, chosen.id, eta_minutes);

        match self.assignments.create(&assignment).await {
            Ok(created) => {
                info!(
                    "指派完成: 事件 {} -> 响应人员 {} (策略: {}, ETA: {} 分钟)",
                    emergency_id,
                    chosen.id,
                    self.strategy.name(),
                    eta_minutes
                );
                Ok(created)
            }
            Err(err) => {
                // 落库失败时回退占用，否则该响应人员会被永久锁死；
                // 回退本身失败只记录，不能掩盖原始错误
                warn!("指派落库失败，释放响应人员 {}: {}", chosen.id, err);
                if let Err(release_err) = self.directory.release(chosen.id).await {
                    warn!("释放响应人员 {} 失败: {}", chosen.id, release_err);
                }
                Err(err)
            }
        }
    }

    /// 选中并占用一名候选人；抢占失败的候选人从集合中剔除后重选
    async fn select_and_reserve(
        &self,
        candidates: &mut Vec<Responder>,
        incident_location: Option<(f64, f64)>,
    ) -> DispatchResult<Responder> {
        loop {
            let chosen = match self.strategy.pick(candidates, incident_location) {
                Some(responder) => responder.clone(),
                None => return Err(DispatchError::NoResponderAvailable),
            };

            match self.directory.reserve(chosen.id).await {
                Ok(true) => return Ok(chosen),
                // 被并发指派抢先或人员已消失，剔除后重选
                Ok(false) | Err(DispatchError::ResponderNotFound { .. }) => {
                    debug!("响应人员 {} 占用失败，从候选集中剔除", chosen.id);
                    candidates.retain(|r| r.id != chosen.id);
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub async fn get_assignment(&self, id: i64) -> DispatchResult<Assignment> {
        self.assignments
            .get_by_id(id)
            .await?
            .ok_or(DispatchError::AssignmentNotFound { id })
    }

    pub async fn assignment_for_emergency(&self, emergency_id: i64) -> DispatchResult<Assignment> {
        self.assignments
            .get_by_emergency(emergency_id)
            .await?
            .ok_or(DispatchError::AssignmentNotFound { id: emergency_id })
    }
}
