use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 新建的报告初始状态，本核心不定义后续状态流转
pub const REPORT_STATUS_NEW: &str = "NEW";

/// 响应人员角色，固定集合
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResponderRole {
    #[serde(rename = "MEDIC")]
    Medic,
    #[serde(rename = "POLICE")]
    Police,
    #[serde(rename = "FIRE")]
    Fire,
}

impl ResponderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponderRole::Medic => "MEDIC",
            ResponderRole::Police => "POLICE",
            ResponderRole::Fire => "FIRE",
        }
    }
}

impl std::str::FromStr for ResponderRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MEDIC" => Ok(ResponderRole::Medic),
            "POLICE" => Ok(ResponderRole::Police),
            "FIRE" => Ok(ResponderRole::Fire),
            _ => Err(format!("Invalid responder role: {s}")),
        }
    }
}

impl sqlx::Type<sqlx::Sqlite> for ResponderRole {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <str as sqlx::Type<sqlx::Sqlite>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for ResponderRole {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        s.parse().map_err(Into::into)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for ResponderRole {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        <&str as sqlx::Encode<sqlx::Sqlite>>::encode(self.as_str(), buf)
    }
}

/// 响应人员
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Responder {
    pub id: i64,
    pub name: String,
    pub role: ResponderRole,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,
    pub availability: bool,
}

impl Responder {
    /// 返回响应人员当前坐标；尚未上报位置时为 None
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.current_lat, self.current_lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
    pub fn entity_description(&self) -> String {
        format!("响应人员 '{}' (ID: {}, 角色: {})", self.name, self.id, self.role.as_str())
    }
}

/// 响应人员准入输入；availability 未指定时默认 true
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResponder {
    pub name: String,
    pub role: ResponderRole,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,
    pub availability: Option<bool>,
}

/// 紧急事件报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyReport {
    pub id: i64,
    /// 自由分类，如 "FIRE"、"ACCIDENT"，本核心不校验
    pub kind: String,
    pub description: String,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    /// 创建时设置一次，之后不再更新
    pub reported_at: DateTime<Utc>,
    pub status: String,
    pub reporter_id: String,
}

impl EmergencyReport {
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.location_lat, self.location_lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// 报告提交输入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReport {
    pub kind: String,
    pub description: String,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub reporter_id: String,
}

impl NewReport {
    /// 以当前时间构建一条 NEW 状态的报告，id 将由存储层生成
    pub fn into_report(self) -> EmergencyReport {
        EmergencyReport {
            id: 0,
            kind: self.kind,
            description: self.description,
            location_lat: self.location_lat,
            location_lng: self.location_lng,
            reported_at: Utc::now(),
            status: REPORT_STATUS_NEW.to_string(),
            reporter_id: self.reporter_id,
        }
    }
}

/// 指派记录与离线端对账的同步状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SyncStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "SYNCED")]
    Synced,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Pending => "PENDING",
            SyncStatus::Synced => "SYNCED",
        }
    }
}

impl sqlx::Type<sqlx::Sqlite> for SyncStatus {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <str as sqlx::Type<sqlx::Sqlite>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for SyncStatus {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        match s {
            "PENDING" => Ok(SyncStatus::Pending),
            "SYNCED" => Ok(SyncStatus::Synced),
            _ => Err(format!("Invalid sync status: {s}").into()),
        }
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for SyncStatus {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        <&str as sqlx::Encode<sqlx::Sqlite>>::encode(self.as_str(), buf)
    }
}

/// 一次指派：一个紧急事件对应一个响应人员
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    /// 按值引用，不做外键约束
    pub emergency_id: i64,
    pub responder_id: i64,
    pub eta_minutes: i32,
    pub assigned_at: DateTime<Utc>,
    pub sync_status: SyncStatus,
}

impl Assignment {
    pub fn new(emergency_id: i64, responder_id: i64, eta_minutes: i32) -> Self {
        Self {
            id: 0, // 将由数据库生成
            emergency_id,
            responder_id,
            eta_minutes,
            assigned_at: Utc::now(),
            sync_status: SyncStatus::Pending,
        }
    }
    pub fn is_pending_sync(&self) -> bool {
        matches!(self.sync_status, SyncStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responder_role_round_trip() {
        for (s, role) in [
            ("MEDIC", ResponderRole::Medic),
            ("POLICE", ResponderRole::Police),
            ("FIRE", ResponderRole::Fire),
        ] {
            assert_eq!(s.parse::<ResponderRole>().unwrap(), role);
            assert_eq!(role.as_str(), s);
        }
        assert!("DRIVER".parse::<ResponderRole>().is_err());
    }

    #[test]
    fn test_responder_location_requires_both_coordinates() {
        let mut responder = Responder {
            id: 1,
            name: "James Mwangi".to_string(),
            role: ResponderRole::Medic,
            current_lat: Some(-1.2921),
            current_lng: None,
            availability: true,
        };
        assert!(responder.location().is_none());

        responder.current_lng = Some(36.8219);
        assert_eq!(responder.location(), Some((-1.2921, 36.8219)));
    }

    #[test]
    fn test_new_report_starts_as_new() {
        let report = NewReport {
            kind: "FIRE".to_string(),
            description: "Warehouse fire".to_string(),
            location_lat: Some(-1.30),
            location_lng: Some(36.83),
            reporter_id: "citizen-42".to_string(),
        }
        .into_report();

        assert_eq!(report.status, REPORT_STATUS_NEW);
        assert_eq!(report.id, 0);
        assert!(report.reported_at <= Utc::now());
    }

    #[test]
    fn test_assignment_created_pending() {
        let assignment = Assignment::new(7, 3, 15);
        assert_eq!(assignment.sync_status, SyncStatus::Pending);
        assert!(assignment.is_pending_sync());
        assert_eq!(assignment.eta_minutes, 15);
    }
}
