use std::sync::Arc;

use tracing::info;

use respond_domain::entities::{EmergencyReport, NewReport};
use respond_domain::errors::{DispatchError, DispatchResult};
use respond_domain::repositories::ReportRepository;

/// 事件接收：校验并登记紧急报告
pub struct IncidentIntake {
    repo: Arc<dyn ReportRepository>,
}

/// 报告人标识校验：去除首尾空白后长度不少于 3。
/// 这是唯一的准入检查；报告内容本身不做校验。
pub fn validate_reporter(reporter_id: Option<&str>) -> bool {
    match reporter_id {
        Some(id) => id.trim().chars().count() >= 3,
        None => false,
    }
}

impl IncidentIntake {
    pub fn new(repo: Arc<dyn ReportRepository>) -> Self {
        Self { repo }
    }

    /// 校验报告人后登记报告；校验不通过返回 RejectedReporter
    pub async fn admit_report(&self, input: NewReport) -> DispatchResult<EmergencyReport> {
        if !validate_reporter(Some(input.reporter_id.as_str())) {
            return Err(DispatchError::rejected_reporter(format!(
                "reporter_id 无效: '{}'",
                input.reporter_id
            )));
        }
        self.create_report(input).await
    }

    /// 登记报告，状态 NEW，时间戳取当前时间；本方法不做任何校验
    pub async fn create_report(&self, input: NewReport) -> DispatchResult<EmergencyReport> {
        let created = self.repo.create(&input.into_report()).await?;
        info!("登记紧急报告: id={}, 类型={}", created.id, created.kind);
        Ok(created)
    }

    pub async fn get_report(&self, id: i64) -> DispatchResult<EmergencyReport> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DispatchError::ReportNotFound { id })
    }

    /// 按报告人查询；无记录时返回空序列
    pub async fn reports_by_reporter(
        &self,
        reporter_id: &str,
    ) -> DispatchResult<Vec<EmergencyReport>> {
        self.repo.list_by_reporter(reporter_id).await
    }
}
