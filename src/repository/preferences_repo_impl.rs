// ==========================================
// 求职申请跟踪系统 - 用户偏好 Repository 实现
// ==========================================
// 职责: 实现偏好设置数据访问（使用 rusqlite）
// 存储: user_preferences 表,每用户一行,整体覆盖式更新
// ==========================================

use crate::domain::preferences::UserPreferences;
use crate::domain::types::ViewMode;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::preferences_repo::PreferencesRepository;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// PreferencesRepositoryImpl
// ==========================================
pub struct PreferencesRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl PreferencesRepositoryImpl {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn row_to_preferences(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserPreferences> {
        let view_raw: String = row.get(0)?;
        let default_view = view_raw.parse::<ViewMode>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, e.into())
        })?;

        Ok(UserPreferences {
            default_view,
            items_per_page: row.get(1)?,
            show_completed_jobs: row.get(2)?,
            compact_mode: row.get(3)?,
            email_notifications: row.get(4)?,
            follow_up_reminders: row.get(5)?,
            application_deadlines: row.get(6)?,
            weekly_reports: row.get(7)?,
            push_notifications: row.get(8)?,
            date_format: row.get(9)?,
            time_format: row.get(10)?,
            timezone: row.get(11)?,
            first_day_of_week: row.get(12)?,
            default_export_format: row.get(13)?,
            include_notes: row.get(14)?,
            include_private_fields: row.get(15)?,
            export_date_range: row.get(16)?,
            theme_mode: row.get(17)?,
            accent_color: row.get(18)?,
            font_size: row.get(19)?,
            reduced_motion: row.get(20)?,
            two_factor_enabled: row.get(21)?,
            session_timeout: row.get(22)?,
            data_retention: row.get(23)?,
            auto_backup: row.get(24)?,
        })
    }
}

#[async_trait]
impl PreferencesRepository for PreferencesRepositoryImpl {
    async fn get_preferences(&self, user_id: i64) -> RepositoryResult<UserPreferences> {
        let conn = self.lock_conn()?;

        let prefs = conn
            .query_row(
                r#"
                SELECT default_view, items_per_page, show_completed_jobs, compact_mode,
                       email_notifications, follow_up_reminders, application_deadlines,
                       weekly_reports, push_notifications,
                       date_format, time_format, timezone, first_day_of_week,
                       default_export_format, include_notes, include_private_fields,
                       export_date_range,
                       theme_mode, accent_color, font_size, reduced_motion,
                       two_factor_enabled, session_timeout, data_retention, auto_backup
                FROM user_preferences WHERE user_id = ?1
                "#,
                params![user_id],
                Self::row_to_preferences,
            )
            .optional()?;

        // 无记录时回退到文档化默认值
        Ok(prefs.unwrap_or_default())
    }

    async fn upsert_preferences(
        &self,
        user_id: i64,
        prefs: &UserPreferences,
    ) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            INSERT OR REPLACE INTO user_preferences (
                user_id, default_view, items_per_page, show_completed_jobs, compact_mode,
                email_notifications, follow_up_reminders, application_deadlines,
                weekly_reports, push_notifications,
                date_format, time_format, timezone, first_day_of_week,
                default_export_format, include_notes, include_private_fields,
                export_date_range,
                theme_mode, accent_color, font_size, reduced_motion,
                two_factor_enabled, session_timeout, data_retention, auto_backup,
                updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27
            )
            "#,
            params![
                user_id,
                prefs.default_view.to_string(),
                prefs.items_per_page,
                prefs.show_completed_jobs,
                prefs.compact_mode,
                prefs.email_notifications,
                prefs.follow_up_reminders,
                prefs.application_deadlines,
                prefs.weekly_reports,
                prefs.push_notifications,
                prefs.date_format,
                prefs.time_format,
                prefs.timezone,
                prefs.first_day_of_week,
                prefs.default_export_format,
                prefs.include_notes,
                prefs.include_private_fields,
                prefs.export_date_range,
                prefs.theme_mode,
                prefs.accent_color,
                prefs.font_size,
                prefs.reduced_motion,
                prefs.two_factor_enabled,
                prefs.session_timeout,
                prefs.data_retention,
                prefs.auto_backup,
                Utc::now(),
            ],
        )?;

        Ok(())
    }
}
