use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use respond_domain::entities::ResponderRole;
use respond_domain::errors::{DispatchError, DispatchResult};

use crate::directory::ResponderDirectory;
use crate::engine::DispatchEngine;

/// 指派结果通知载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchNotification {
    pub report_id: i64,
    pub responder_name: String,
    pub responder_role: ResponderRole,
    pub eta_minutes: i32,
}

/// 通知编排：指派后读回响应人员详情，组合为面向调用方的结果。
/// 自身无状态；指派后响应人员恰好消失时按未找到处理而非崩溃。
pub struct NotificationOrchestrator {
    engine: Arc<DispatchEngine>,
    directory: Arc<ResponderDirectory>,
}

impl NotificationOrchestrator {
    pub fn new(engine: Arc<DispatchEngine>, directory: Arc<ResponderDirectory>) -> Self {
        Self { engine, directory }
    }

    pub async fn notify(&self, emergency_id: i64) -> DispatchResult<DispatchNotification> {
        let assignment = self.engine.assign(emergency_id).await?;

        let responder = match self.directory.get(assignment.responder_id).await {
            Ok(responder) => responder,
            Err(DispatchError::ResponderNotFound { id }) => {
                // 数据不一致：指派刚写入但响应人员已不存在
                warn!("指派 {} 引用的响应人员 {} 不存在", assignment.id, id);
                return Err(DispatchError::ResponderNotFound { id });
            }
            Err(err) => return Err(err),
        };

        Ok(DispatchNotification {
            report_id: emergency_id,
            responder_name: responder.name,
            responder_role: responder.role,
            eta_minutes: assignment.eta_minutes,
        })
    }
}
