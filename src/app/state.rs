// ==========================================
// 求职申请跟踪系统 - 应用状态
// ==========================================
// 职责: 单一组装根,管理应用级别的共享状态和API实例
// 红线: 不使用全局可变单例,管道/接口只通过构造参数取得依赖
// ==========================================

use std::sync::Arc;

use crate::api::{ImportApi, JobApi, PreferencesApi};
use crate::repository::{JobRepositoryImpl, PreferencesRepositoryImpl};

/// 应用状态
///
/// 包含所有API实例和共享资源,在进程内作为组装根传递
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 求职记录API
    pub job_api: Arc<JobApi>,

    /// 导入API
    pub import_api: Arc<ImportApi>,

    /// 偏好设置API
    pub preferences_api: Arc<PreferencesApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    ///
    /// # 流程
    /// 1. 打开连接并应用统一 PRAGMA
    /// 2. 幂等建表 + schema_version 核对
    /// 3. 组装仓储与API实例
    pub fn new(db_path: String) -> Result<Self, String> {
        // 初始化 schema
        let conn = crate::db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("打开数据库失败: {}", e))?;
        crate::db::init_schema(&conn).map_err(|e| format!("初始化 schema 失败: {}", e))?;

        match crate::db::read_schema_version(&conn) {
            Ok(Some(version)) if version != crate::db::CURRENT_SCHEMA_VERSION => {
                tracing::warn!(
                    found = version,
                    expected = crate::db::CURRENT_SCHEMA_VERSION,
                    "schema_version 与当前代码不一致"
                );
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "读取 schema_version 失败");
            }
        }
        drop(conn);

        // 组装仓储
        let job_repo = Arc::new(
            JobRepositoryImpl::new(&db_path).map_err(|e| format!("创建求职仓储失败: {}", e))?,
        );
        let prefs_repo = Arc::new(
            PreferencesRepositoryImpl::new(&db_path)
                .map_err(|e| format!("创建偏好仓储失败: {}", e))?,
        );

        // 组装API
        let job_api = Arc::new(JobApi::new(job_repo));
        let import_api = Arc::new(ImportApi::new(db_path.clone()));
        let preferences_api = Arc::new(PreferencesApi::new(prefs_repo));

        Ok(AppState {
            db_path,
            job_api,
            import_api,
            preferences_api,
        })
    }
}

/// 默认数据库路径（<数据目录>/jobtrack/jobtrack.db）
///
/// 数据目录不可用时回退到当前目录
pub fn get_default_db_path() -> String {
    let base = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let dir = base.join("jobtrack");

    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(error = %e, "创建数据目录失败,回退到当前目录");
        return "jobtrack.db".to_string();
    }

    dir.join("jobtrack.db").display().to_string()
}
