// ==========================================
// 求职申请跟踪系统 - 主入口
// ==========================================
// 库模式为主,此入口用于初始化数据目录并自检
// ==========================================

use jobtrack::app::{get_default_db_path, AppState};

fn main() {
    // 初始化日志系统
    jobtrack::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", jobtrack::APP_NAME);
    tracing::info!("系统版本: {}", jobtrack::VERSION);
    tracing::info!("==================================================");

    // 获取数据库路径
    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    // 创建AppState（组装根）
    tracing::info!("正在初始化AppState...");
    match AppState::new(db_path) {
        Ok(state) => {
            tracing::info!(db_path = %state.db_path, "AppState初始化成功");
            tracing::info!("库模式使用方式: use jobtrack::app::AppState;");
        }
        Err(e) => {
            tracing::error!(error = %e, "AppState初始化失败");
            std::process::exit(1);
        }
    }
}
