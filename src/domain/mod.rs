// ==========================================
// 求职申请跟踪系统 - 领域层
// ==========================================
// 职责: 实体与类型定义,不依赖仓储/API 层
// ==========================================

pub mod import;
pub mod job;
pub mod preferences;
pub mod types;

// 重导出核心类型
pub use import::{
    CommitFailure, CommitOutcome, ImportBatch, ImportResult, ImportedJob, ParsedFile, RawRow,
    RowError,
};
pub use job::{Job, JobFilter, JobSort, JobStatusCount, JobUpdate, NewJob};
pub use preferences::UserPreferences;
pub use types::{JobStatus, SortKey, SortOrder, ViewMode};
