// ==========================================
// 求职申请跟踪系统 - 求职记录API
// ==========================================
// 职责: 封装求职记录 CRUD / 列表过滤排序 / 统计 / CSV 导出
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{validate_job_update, validate_new_job};
use crate::domain::job::{Job, JobFilter, JobSort, JobStatusCount, JobUpdate, NewJob};
use crate::domain::types::{SortKey, SortOrder};
use crate::repository::job_repo::JobRepository;
use crate::repository::JobRepositoryImpl;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// 状态统计响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatsResponse {
    /// 记录总数
    pub total: i64,
    /// 每状态一条（闭集全量,含 0）
    pub counts: Vec<JobStatusCount>,
}

/// CSV 导出载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    /// 建议下载文件名（jobs-YYYY-MM-DD.csv）
    pub filename: String,
    /// CSV 文本内容
    pub content: String,
}

/// 导出列（顺序即列顺序,为下游表格工具的兼容性契约）
const EXPORT_HEADERS: [&str; 8] = [
    "Company",
    "Position",
    "Application Date",
    "Status",
    "Notes",
    "Job Link",
    "Follow-up Date",
    "Created At",
];

/// 求职记录API
pub struct JobApi {
    job_repo: Arc<JobRepositoryImpl>,
}

impl JobApi {
    /// 创建新的JobApi实例
    pub fn new(job_repo: Arc<JobRepositoryImpl>) -> Self {
        Self { job_repo }
    }

    /// 创建求职记录（手工录入路径,含 URL 强校验）
    pub async fn create_job(&self, user_id: i64, job: NewJob) -> ApiResult<Job> {
        validate_new_job(&job)?;

        let created = self.job_repo.create_job(user_id, job).await?;
        info!(user_id = user_id, job_id = created.id, "创建求职记录");
        Ok(created)
    }

    /// 按 id 查询
    pub async fn get_job(&self, user_id: i64, job_id: i64) -> ApiResult<Job> {
        self.job_repo
            .get_job(user_id, job_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("求职记录不存在: {}", job_id)))
    }

    /// 过滤 + 排序的列表查询
    pub async fn list_jobs(
        &self,
        user_id: i64,
        filter: &JobFilter,
        sort: JobSort,
    ) -> ApiResult<Vec<Job>> {
        // 日期区间合法性
        if let (Some(from), Some(to)) = (filter.date_from, filter.date_to) {
            if from > to {
                return Err(ApiError::InvalidInput(format!(
                    "日期区间无效: {} > {}",
                    from, to
                )));
            }
        }

        let jobs = self.job_repo.list_jobs(user_id, filter, sort).await?;
        debug!(user_id = user_id, count = jobs.len(), "列表查询完成");
        Ok(jobs)
    }

    /// 部分更新（看板拖拽换列走此口,status 单字段更新）
    pub async fn update_job(
        &self,
        user_id: i64,
        job_id: i64,
        update: JobUpdate,
    ) -> ApiResult<Job> {
        validate_job_update(&update)?;

        let updated = self.job_repo.update_job(user_id, job_id, update).await?;
        info!(user_id = user_id, job_id = job_id, "更新求职记录");
        Ok(updated)
    }

    /// 删除记录
    pub async fn delete_job(&self, user_id: i64, job_id: i64) -> ApiResult<()> {
        let deleted = self.job_repo.delete_job(user_id, job_id).await?;
        if !deleted {
            return Err(ApiError::NotFound(format!("求职记录不存在: {}", job_id)));
        }
        info!(user_id = user_id, job_id = job_id, "删除求职记录");
        Ok(())
    }

    /// 状态统计（仪表盘汇总）
    pub async fn get_job_stats(&self, user_id: i64) -> ApiResult<JobStatsResponse> {
        let counts = self.job_repo.count_by_status(user_id).await?;
        let total = counts.iter().map(|c| c.count).sum();
        Ok(JobStatsResponse { total, counts })
    }

    /// 导出全部记录为 CSV
    ///
    /// # 返回
    /// - Ok(CsvExport): 列与顺序固定（见 EXPORT_HEADERS）,可选字段空串
    /// - Err(NotFound): 无记录可导出
    pub async fn export_jobs_csv(&self, user_id: i64) -> ApiResult<CsvExport> {
        let jobs = self
            .job_repo
            .list_jobs(
                user_id,
                &JobFilter::default(),
                JobSort {
                    key: SortKey::ApplicationDate,
                    order: SortOrder::Asc,
                },
            )
            .await?;

        if jobs.is_empty() {
            return Err(ApiError::NotFound("No jobs to export".to_string()));
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(EXPORT_HEADERS)
            .map_err(|e| ApiError::InternalError(format!("CSV 写入失败: {}", e)))?;

        for job in &jobs {
            let record = [
                job.company.clone(),
                job.position.clone(),
                job.application_date.format("%Y-%m-%d").to_string(),
                job.status.to_string(),
                job.notes.clone().unwrap_or_default(),
                job.job_link.clone().unwrap_or_default(),
                job.follow_up_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                job.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            ];
            writer
                .write_record(&record)
                .map_err(|e| ApiError::InternalError(format!("CSV 写入失败: {}", e)))?;
        }

        let content = writer
            .into_inner()
            .map_err(|e| ApiError::InternalError(format!("CSV 写入失败: {}", e)))
            .and_then(|bytes| {
                String::from_utf8(bytes)
                    .map_err(|e| ApiError::InternalError(format!("CSV 编码失败: {}", e)))
            })?;

        let filename = format!("jobs-{}.csv", Utc::now().format("%Y-%m-%d"));
        info!(user_id = user_id, rows = jobs.len(), "导出 CSV 完成");

        Ok(CsvExport { filename, content })
    }
}
