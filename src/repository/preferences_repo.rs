// ==========================================
// 求职申请跟踪系统 - 用户偏好 Repository Trait
// ==========================================
// 职责: 定义偏好设置数据访问接口（不包含实现）
// ==========================================

use crate::domain::preferences::UserPreferences;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// PreferencesRepository Trait
// ==========================================
// 用途: 每用户一行的偏好读写
// 实现者: PreferencesRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// 读取用户偏好
    ///
    /// # 返回
    /// - 无记录时返回文档化默认值（不视为错误）
    async fn get_preferences(&self, user_id: i64) -> RepositoryResult<UserPreferences>;

    /// 整体覆盖式写入（INSERT OR REPLACE）
    async fn upsert_preferences(
        &self,
        user_id: i64,
        prefs: &UserPreferences,
    ) -> RepositoryResult<()>;
}
