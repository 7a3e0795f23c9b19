// ==========================================
// 求职申请跟踪系统 - 求职记录 Repository Trait
// ==========================================
// 职责: 定义求职记录数据访问接口（不包含实现）
// 红线: Repository 不含业务规则,只做数据 CRUD
// 多租户: 所有操作以 user_id 为作用域
// ==========================================

use crate::domain::job::{Job, JobFilter, JobSort, JobStatusCount, JobUpdate, NewJob};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// JobRepository Trait
// ==========================================
// 用途: 求职记录数据访问（导入管道的持久化协作方）
// 实现者: JobRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// 创建一条求职记录
    ///
    /// # 返回
    /// - Ok(Job): 含生成 id 与审计字段的完整记录
    async fn create_job(&self, user_id: i64, job: NewJob) -> RepositoryResult<Job>;

    /// 按 id 查询（不属于该用户时返回 None）
    async fn get_job(&self, user_id: i64, job_id: i64) -> RepositoryResult<Option<Job>>;

    /// 过滤 + 排序的列表查询
    ///
    /// # 参数
    /// - filter: 状态 / 关键词 / 投递日期区间
    /// - sort: 排序键与方向
    async fn list_jobs(
        &self,
        user_id: i64,
        filter: &JobFilter,
        sort: JobSort,
    ) -> RepositoryResult<Vec<Job>>;

    /// 部分更新（看板拖拽换列即 status 单字段更新）
    ///
    /// # 返回
    /// - Ok(Job): 更新后的完整记录
    /// - Err(NotFound): 记录不存在或不属于该用户
    async fn update_job(
        &self,
        user_id: i64,
        job_id: i64,
        update: JobUpdate,
    ) -> RepositoryResult<Job>;

    /// 删除记录
    ///
    /// # 返回
    /// - Ok(true): 已删除
    /// - Ok(false): 记录不存在或不属于该用户
    async fn delete_job(&self, user_id: i64, job_id: i64) -> RepositoryResult<bool>;

    /// 按状态统计记录数（闭集内每个状态一条,含 0）
    async fn count_by_status(&self, user_id: i64) -> RepositoryResult<Vec<JobStatusCount>>;
}
