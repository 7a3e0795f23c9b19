// ==========================================
// 求职申请跟踪系统 - 偏好设置API
// ==========================================
// 职责: 用户偏好的读取与整体覆盖式更新
// 偏好结构为显式枚举字段（见 domain/preferences.rs）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::preferences::UserPreferences;
use crate::repository::preferences_repo::PreferencesRepository;
use crate::repository::PreferencesRepositoryImpl;
use std::sync::Arc;
use tracing::info;

/// 偏好设置API
pub struct PreferencesApi {
    prefs_repo: Arc<PreferencesRepositoryImpl>,
}

impl PreferencesApi {
    /// 创建新的PreferencesApi实例
    pub fn new(prefs_repo: Arc<PreferencesRepositoryImpl>) -> Self {
        Self { prefs_repo }
    }

    /// 读取用户偏好（无记录时返回文档化默认值）
    pub async fn get_preferences(&self, user_id: i64) -> ApiResult<UserPreferences> {
        Ok(self.prefs_repo.get_preferences(user_id).await?)
    }

    /// 整体覆盖式更新
    ///
    /// # 返回
    /// - Ok(UserPreferences): 写入后的偏好（回显）
    pub async fn update_preferences(
        &self,
        user_id: i64,
        prefs: UserPreferences,
    ) -> ApiResult<UserPreferences> {
        // 数值字段合法性
        if prefs.items_per_page <= 0 || prefs.items_per_page > 100 {
            return Err(ApiError::InvalidInput(format!(
                "每页条数无效: {}（应在 1-100 之间）",
                prefs.items_per_page
            )));
        }
        if prefs.session_timeout <= 0 {
            return Err(ApiError::InvalidInput(format!(
                "会话超时无效: {}（应为正数,单位分钟）",
                prefs.session_timeout
            )));
        }
        if prefs.data_retention <= 0 {
            return Err(ApiError::InvalidInput(format!(
                "数据保留期无效: {}（应为正数,单位天）",
                prefs.data_retention
            )));
        }

        self.prefs_repo.upsert_preferences(user_id, &prefs).await?;
        info!(user_id = user_id, "更新用户偏好");
        Ok(prefs)
    }
}
