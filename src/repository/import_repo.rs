// ==========================================
// 求职申请跟踪系统 - 导入审计 Repository Trait
// ==========================================
// 职责: 定义导入批次审计记录的数据访问接口
// ==========================================

use crate::domain::import::ImportBatch;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// ImportAuditRepository Trait
// ==========================================
// 用途: 每次确认提交写一条批次记录,供导入历史查询
// 实现者: ImportAuditRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait ImportAuditRepository: Send + Sync {
    /// 插入导入批次记录
    async fn insert_batch(&self, batch: ImportBatch) -> RepositoryResult<()>;

    /// 查询某用户最近的导入批次（按提交时间倒序）
    async fn recent_batches(
        &self,
        user_id: i64,
        limit: usize,
    ) -> RepositoryResult<Vec<ImportBatch>>;
}
