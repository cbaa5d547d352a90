use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DispatchError {
    #[error("数据库操作失败: {0}")]
    Database(String),
    #[error("紧急报告不存在: id={id}")]
    ReportNotFound { id: i64 },
    #[error("响应人员不存在: id={id}")]
    ResponderNotFound { id: i64 },
    #[error("指派记录不存在: id={id}")]
    AssignmentNotFound { id: i64 },
    #[error("当前没有可用的响应人员")]
    NoResponderAvailable,
    #[error("紧急事件已有指派: emergency_id={emergency_id}")]
    AlreadyAssigned { emergency_id: i64 },
    #[error("报告人校验不通过: {0}")]
    RejectedReporter(String),
    #[error("数据序列化错误: {0}")]
    Serialization(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

impl DispatchError {
    pub fn database_error<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }
    pub fn report_not_found(id: i64) -> Self {
        Self::ReportNotFound { id }
    }
    pub fn responder_not_found(id: i64) -> Self {
        Self::ResponderNotFound { id }
    }
    pub fn assignment_not_found(id: i64) -> Self {
        Self::AssignmentNotFound { id }
    }
    pub fn rejected_reporter<S: Into<String>>(msg: S) -> Self {
        Self::RejectedReporter(msg.into())
    }
    /// 可由调用方恢复的预期结果，而非进程级故障
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            DispatchError::Database(_) | DispatchError::Serialization(_)
        )
    }
}

impl From<sqlx::Error> for DispatchError {
    fn from(err: sqlx::Error) -> Self {
        DispatchError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        DispatchError::Serialization(err.to_string())
    }
}
