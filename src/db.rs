// ==========================================
// 求职申请跟踪系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout,减少并发写入时的偶发 busy 错误
// - 提供幂等建表（首次启动/测试环境共用一套 schema）
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 当前代码所期望的 schema_version
/// 仅用于提示/告警（不做自动迁移）,避免静默在旧库上运行
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 读取 schema_version（若表不存在则返回 None）
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })?;
    Ok(v)
}

/// 幂等初始化 schema
///
/// 非目标: 迁移机制（版本不匹配只告警,不自动升级）
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS jobs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            company TEXT NOT NULL,
            position TEXT NOT NULL,
            application_date TEXT NOT NULL,
            status TEXT NOT NULL,
            notes TEXT,
            job_link TEXT,
            follow_up_date TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_jobs_user ON jobs(user_id);
        CREATE INDEX IF NOT EXISTS idx_jobs_user_status ON jobs(user_id, status);

        CREATE TABLE IF NOT EXISTS user_preferences (
            user_id INTEGER PRIMARY KEY,
            default_view TEXT NOT NULL,
            items_per_page INTEGER NOT NULL,
            show_completed_jobs INTEGER NOT NULL,
            compact_mode INTEGER NOT NULL,
            email_notifications INTEGER NOT NULL,
            follow_up_reminders INTEGER NOT NULL,
            application_deadlines INTEGER NOT NULL,
            weekly_reports INTEGER NOT NULL,
            push_notifications INTEGER NOT NULL,
            date_format TEXT NOT NULL,
            time_format TEXT NOT NULL,
            timezone TEXT NOT NULL,
            first_day_of_week TEXT NOT NULL,
            default_export_format TEXT NOT NULL,
            include_notes INTEGER NOT NULL,
            include_private_fields INTEGER NOT NULL,
            export_date_range TEXT NOT NULL,
            theme_mode TEXT NOT NULL,
            accent_color TEXT NOT NULL,
            font_size TEXT NOT NULL,
            reduced_motion INTEGER NOT NULL,
            two_factor_enabled INTEGER NOT NULL,
            session_timeout INTEGER NOT NULL,
            data_retention INTEGER NOT NULL,
            auto_backup INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS import_batch (
            batch_id TEXT PRIMARY KEY,
            user_id INTEGER NOT NULL,
            file_name TEXT,
            total_rows INTEGER NOT NULL,
            imported_rows INTEGER NOT NULL,
            validation_errors INTEGER NOT NULL,
            commit_errors INTEGER NOT NULL,
            imported_at TEXT NOT NULL,
            elapsed_ms INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_import_batch_user ON import_batch(user_id, imported_at);
        "#,
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [CURRENT_SCHEMA_VERSION],
    )?;

    Ok(())
}
