// ==========================================
// 求职申请跟踪系统 - 求职记录领域模型
// ==========================================
// 用途: 仓储层读写,API 层出入参
// 多租户: 每条记录归属一个 user_id,由调用方（认证层,范围外）提供
// ==========================================

use crate::domain::types::{JobStatus, SortKey, SortOrder};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// 区分 "字段缺席" 与 "字段显式为 null"（部分更新语义需要）
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// ==========================================
// Job - 求职申请记录
// ==========================================
// 对齐 jobs 表,JSON 字段名与前端契约一致（camelCase）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub user_id: i64,

    // ===== 必填字段 =====
    pub company: String,              // 公司名称
    pub position: String,             // 职位名称
    pub application_date: NaiveDate,  // 投递日期
    pub status: JobStatus,            // 求职状态（闭集）

    // ===== 可选字段 =====
    pub notes: Option<String>,        // 备注
    pub job_link: Option<String>,     // 职位链接
    pub follow_up_date: Option<NaiveDate>, // 跟进日期

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ==========================================
// NewJob - 创建求职记录的载荷
// ==========================================
// 校验规则见 api/validator.rs（持久化协作方的契约）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub company: String,
    pub position: String,
    pub application_date: NaiveDate,
    pub status: JobStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub job_link: Option<String>,
    #[serde(default)]
    pub follow_up_date: Option<NaiveDate>,
}

// ==========================================
// JobUpdate - 部分更新载荷
// ==========================================
// 所有字段可选; 看板拖拽换列即 status 单字段更新
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub application_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    // Option<Option<..>>: None=不变, Some(None)=清空, Some(Some(v))=赋值
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub job_link: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub follow_up_date: Option<Option<NaiveDate>>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.position.is_none()
            && self.application_date.is_none()
            && self.status.is_none()
            && self.notes.is_none()
            && self.job_link.is_none()
            && self.follow_up_date.is_none()
    }
}

// ==========================================
// JobFilter - 列表过滤条件
// ==========================================
// 对齐前端过滤器: 状态 / 关键词 / 投递日期区间
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    /// 状态过滤（None = 全部）
    pub status: Option<JobStatus>,
    /// 关键词（公司/职位/备注,大小写不敏感的子串匹配）
    pub search: Option<String>,
    /// 投递日期下界（含）
    pub date_from: Option<NaiveDate>,
    /// 投递日期上界（含）
    pub date_to: Option<NaiveDate>,
}

// ==========================================
// JobSort - 列表排序
// ==========================================
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct JobSort {
    pub key: SortKey,
    pub order: SortOrder,
}

// ==========================================
// JobStatusCount - 状态统计
// ==========================================
// 用途: 仪表盘汇总（每状态一条）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusCount {
    pub status: JobStatus,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_serializes_camel_case() {
        let job = Job {
            id: 1,
            user_id: 7,
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            application_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: JobStatus::Applied,
            notes: None,
            job_link: None,
            follow_up_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["applicationDate"], "2024-01-15");
        assert_eq!(json["status"], "Applied");
        assert!(json.get("jobLink").is_some());
    }

    #[test]
    fn test_job_update_empty() {
        assert!(JobUpdate::default().is_empty());

        let update = JobUpdate {
            status: Some(JobStatus::Interviewed),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_job_update_clear_field() {
        let json = r#"{"notes": null, "status": "Rejected"}"#;
        let update: JobUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.notes, Some(None));
        assert_eq!(update.status, Some(JobStatus::Rejected));
        assert!(update.job_link.is_none());
    }
}
