// ==========================================
// 求职申请跟踪系统 - 导入API
// ==========================================
// 职责: 封装导入相关功能（预览 / 确认提交 / 导入历史）
// 两段式契约: 预览展示精确的有效/无效行数与逐行错误文案,
//             提交后报告"实际落库条数"而非"尝试条数"
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::import::{CommitFailure, ImportBatch, ImportResult};
use crate::importer::{
    BatchCommitter, JobHeaderNormalizer, JobImporter, JobImporterImpl, JobRowValidator,
    UniversalFileParser,
};
use crate::repository::{
    ImportAuditRepository, ImportAuditRepositoryImpl, JobRepositoryImpl,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// 导入预览响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreviewResponse {
    /// 校验通过行数
    pub valid: usize,
    /// 校验失败行数（含文件级 row=0 错误）
    pub invalid: usize,
    /// 完整分区结果（success 供确认提交,errors 供逐行修正）
    pub result: ImportResult,
}

/// 导入提交响应（三态汇总）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCommitResponse {
    /// 批次ID（审计记录主键）
    pub batch_id: String,
    /// 数据行总数（success + errors）
    pub total_rows: usize,
    /// 实际落库条数
    pub imported: usize,
    /// 校验拒绝条数
    pub validation_rejected: usize,
    /// 提交失败条数
    pub commit_rejected: usize,
    /// 逐条提交失败明细
    pub failures: Vec<CommitFailure>,
    /// 提交耗时（毫秒）
    pub elapsed_ms: i64,
}

/// 导入API
pub struct ImportApi {
    db_path: String,
}

impl ImportApi {
    /// 创建新的ImportApi实例
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }

    /// 预览导入文件（纯函数,不落库）
    ///
    /// # 参数
    /// - file_path: 用户选择的文件路径（.csv/.xls/.xlsx）
    ///
    /// # 返回
    /// - Ok(ImportPreviewResponse): 分区结果与计数
    ///   文件级失败不报 Err,表示为单条 row=0 错误
    pub fn preview_import(&self, file_path: &str) -> ApiResult<ImportPreviewResponse> {
        let importer = self
            .create_importer()
            .map_err(|e| ApiError::ImportError(format!("创建导入器失败: {}", e)))?;

        let result = importer.preview(file_path);

        Ok(ImportPreviewResponse {
            valid: result.success.len(),
            invalid: result.errors.len(),
            result,
        })
    }

    /// 提交已确认的预览结果
    ///
    /// # 参数
    /// - user_id: 记录归属用户
    /// - result: 用户确认的预览结果（提交其中的 success 列表）
    /// - file_name: 源文件名（仅用于审计记录）
    ///
    /// # 语义
    /// - settled 模式: 单条失败不中断批次
    /// - 每次提交写一条 import_batch 审计记录
    pub async fn commit_import(
        &self,
        user_id: i64,
        result: &ImportResult,
        file_name: Option<&str>,
    ) -> ApiResult<ImportCommitResponse> {
        if result.success.is_empty() {
            return Err(ApiError::InvalidInput(
                "没有可提交的记录（success 列表为空）".to_string(),
            ));
        }

        let importer = self
            .create_importer()
            .map_err(|e| ApiError::ImportError(format!("创建导入器失败: {}", e)))?;

        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        let outcome = importer.commit(user_id, &result.success).await;
        let elapsed_ms = start_time.elapsed().as_millis() as i64;

        // 审计记录
        let audit_repo = ImportAuditRepositoryImpl::new(&self.db_path)
            .map_err(|e| ApiError::DatabaseError(format!("创建仓储失败: {}", e)))?;
        audit_repo
            .insert_batch(ImportBatch {
                batch_id: batch_id.clone(),
                user_id,
                file_name: file_name.map(|n| n.to_string()),
                total_rows: result.total_rows() as i64,
                imported_rows: outcome.committed as i64,
                validation_errors: result.errors.len() as i64,
                commit_errors: outcome.failures.len() as i64,
                imported_at: Utc::now(),
                elapsed_ms,
            })
            .await?;

        info!(
            batch_id = %batch_id,
            user_id = user_id,
            imported = outcome.committed,
            validation_rejected = result.errors.len(),
            commit_rejected = outcome.failures.len(),
            elapsed_ms = elapsed_ms,
            "导入提交完成"
        );

        Ok(ImportCommitResponse {
            batch_id,
            total_rows: result.total_rows(),
            imported: outcome.committed,
            validation_rejected: result.errors.len(),
            commit_rejected: outcome.failures.len(),
            failures: outcome.failures,
            elapsed_ms,
        })
    }

    /// 查询最近的导入批次（审计历史）
    pub async fn list_recent_batches(
        &self,
        user_id: i64,
        limit: usize,
    ) -> ApiResult<Vec<ImportBatch>> {
        let limit = limit.clamp(1, 100);

        let audit_repo = ImportAuditRepositoryImpl::new(&self.db_path)
            .map_err(|e| ApiError::DatabaseError(format!("创建仓储失败: {}", e)))?;

        Ok(audit_repo.recent_batches(user_id, limit).await?)
    }

    /// 创建JobImporter实例（组件按固定配方组装）
    fn create_importer(
        &self,
    ) -> Result<JobImporterImpl<JobRepositoryImpl>, Box<dyn std::error::Error>> {
        let job_repo = JobRepositoryImpl::new(&self.db_path)?;

        Ok(JobImporterImpl::new(
            job_repo,
            Box::new(UniversalFileParser),
            Box::new(JobHeaderNormalizer),
            Box::new(JobRowValidator),
            BatchCommitter,
        ))
    }
}
