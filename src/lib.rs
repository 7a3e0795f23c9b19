// ==========================================
// 求职申请跟踪系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 定位: 多租户求职申请数据管理核心（导入/CRUD/偏好/导出）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 外部文件导入
pub mod importer;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 组装根
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{JobStatus, SortKey, SortOrder, ViewMode};

// 领域实体
pub use domain::{
    CommitOutcome, ImportBatch, ImportResult, ImportedJob, Job, JobFilter, JobSort,
    JobStatusCount, JobUpdate, NewJob, UserPreferences,
};

// API
pub use api::{ImportApi, JobApi, PreferencesApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "求职申请跟踪系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
