// ==========================================
// 求职申请跟踪系统 - 用户偏好设置
// ==========================================
// 显式枚举全部字段（取代动态 any 配置对象）,
// 每个字段带文档化默认值; 读取无记录时返回默认值
// ==========================================

use crate::domain::types::ViewMode;
use serde::{Deserialize, Serialize};

// ==========================================
// UserPreferences - 用户偏好
// ==========================================
// 对齐 user_preferences 表（每用户一行,整体覆盖式更新）
// 主题/通知字段仅作为数据存取,渲染与推送均在范围外
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    // ===== 面板布局 =====
    pub default_view: ViewMode,        // 默认: kanban
    pub items_per_page: i32,           // 默认: 10
    pub show_completed_jobs: bool,     // 默认: true
    pub compact_mode: bool,            // 默认: false

    // ===== 通知 =====
    pub email_notifications: bool,     // 默认: true
    pub follow_up_reminders: bool,     // 默认: true
    pub application_deadlines: bool,   // 默认: true
    pub weekly_reports: bool,          // 默认: false
    pub push_notifications: bool,      // 默认: false

    // ===== 日期与时间 =====
    pub date_format: String,           // 默认: "MM/DD/YYYY"
    pub time_format: String,           // 默认: "12h"
    pub timezone: String,              // 默认: "UTC"
    pub first_day_of_week: String,     // 默认: "sunday"

    // ===== 导出设置 =====
    pub default_export_format: String, // 默认: "csv"
    pub include_notes: bool,           // 默认: true
    pub include_private_fields: bool,  // 默认: false
    pub export_date_range: String,     // 默认: "all"

    // ===== 主题 =====
    pub theme_mode: String,            // 默认: "system"
    pub accent_color: String,          // 默认: "indigo"
    pub font_size: String,             // 默认: "medium"
    pub reduced_motion: bool,          // 默认: false

    // ===== 账户设置 =====
    pub two_factor_enabled: bool,      // 默认: false
    pub session_timeout: i32,          // 分钟,默认: 60
    pub data_retention: i32,           // 天,默认: 365
    pub auto_backup: bool,             // 默认: true
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            default_view: ViewMode::Kanban,
            items_per_page: 10,
            show_completed_jobs: true,
            compact_mode: false,

            email_notifications: true,
            follow_up_reminders: true,
            application_deadlines: true,
            weekly_reports: false,
            push_notifications: false,

            date_format: "MM/DD/YYYY".to_string(),
            time_format: "12h".to_string(),
            timezone: "UTC".to_string(),
            first_day_of_week: "sunday".to_string(),

            default_export_format: "csv".to_string(),
            include_notes: true,
            include_private_fields: false,
            export_date_range: "all".to_string(),

            theme_mode: "system".to_string(),
            accent_color: "indigo".to_string(),
            font_size: "medium".to_string(),
            reduced_motion: false,

            two_factor_enabled: false,
            session_timeout: 60,
            data_retention: 365,
            auto_backup: true,
        }
    }
}
