// ==========================================
// 求职申请跟踪系统 - 导入管道实现
// ==========================================
// 职责: 整合导入流程（预览 + 确认提交两段式）
// 流程: 解析 → 表头归一化 → 行校验 → 预览分区 → (用户确认) → 批量提交
// 不变量: 预览绝不落库; 每个数据行恰好落入 success/errors 之一
// ==========================================

use crate::domain::import::{CommitOutcome, ImportResult, ImportedJob, RowError};
use crate::importer::batch_committer::BatchCommitter;
use crate::importer::job_importer_trait::{
    FileParser, HeaderNormalizer, JobImporter, RowValidator,
};
use crate::repository::job_repo::JobRepository;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

// ==========================================
// JobImporterImpl - 导入管道实现
// ==========================================
pub struct JobImporterImpl<R>
where
    R: JobRepository,
{
    // 持久化协作方
    job_repo: R,

    // 管道组件
    file_parser: Box<dyn FileParser>,
    header_normalizer: Box<dyn HeaderNormalizer>,
    row_validator: Box<dyn RowValidator>,
    committer: BatchCommitter,
}

impl<R> JobImporterImpl<R>
where
    R: JobRepository,
{
    /// 创建新的 JobImporter 实例
    ///
    /// # 参数
    /// - job_repo: 求职记录仓储（提交阶段的持久化协作方）
    /// - file_parser: 文件解析器
    /// - header_normalizer: 表头归一化器
    /// - row_validator: 行校验器
    /// - committer: 批量提交器
    pub fn new(
        job_repo: R,
        file_parser: Box<dyn FileParser>,
        header_normalizer: Box<dyn HeaderNormalizer>,
        row_validator: Box<dyn RowValidator>,
        committer: BatchCommitter,
    ) -> Self {
        Self {
            job_repo,
            file_parser,
            header_normalizer,
            row_validator,
            committer,
        }
    }
}

#[async_trait::async_trait]
impl<R> JobImporter for JobImporterImpl<R>
where
    R: JobRepository + Send + Sync,
{
    /// 解析并校验文件,生成预览分区
    #[instrument(skip(self, file_path))]
    fn preview<P: AsRef<Path>>(&self, file_path: P) -> ImportResult {
        let path = file_path.as_ref();
        info!(file = %path.display(), "开始解析导入文件");

        // === 步骤 1: 文件解析 ===
        let parsed = match self.file_parser.parse_rows(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                // 文件级失败统一表示为单条 row=0 错误,不中断调用方
                warn!(error = %e, "文件级解析失败");
                return ImportResult::from_file_error(e.to_string());
            }
        };
        info!(
            headers = parsed.headers.len(),
            rows = parsed.rows.len(),
            "文件解析完成"
        );

        // === 步骤 2: 表头归一化 + 行校验 ===
        let mut result = ImportResult::default();
        for row in parsed.rows {
            let row = self.header_normalizer.normalize_row(row);
            match self.row_validator.validate_row(&row) {
                Ok(job) => result.success.push(job),
                Err(error) => {
                    debug!(row = row.row_number, error = %error, "行校验未通过");
                    result.errors.push(RowError {
                        row: row.row_number,
                        error,
                        data: row.fields,
                    });
                }
            }
        }

        info!(
            valid = result.success.len(),
            invalid = result.errors.len(),
            "行校验完成"
        );
        result
    }

    /// 提交已确认的记录（settled 模式,逐条串行）
    #[instrument(skip(self, accepted), fields(count = accepted.len()))]
    async fn commit(&self, user_id: i64, accepted: &[ImportedJob]) -> CommitOutcome {
        info!(user_id = user_id, count = accepted.len(), "开始批量提交导入记录");

        let outcome = self
            .committer
            .commit_all(&self.job_repo, user_id, accepted)
            .await;

        info!(
            committed = outcome.committed,
            failed = outcome.failures.len(),
            "批量提交完成"
        );
        outcome
    }
}
