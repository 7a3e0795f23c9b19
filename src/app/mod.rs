// ==========================================
// 求职申请跟踪系统 - 应用层
// ==========================================
// 职责: 进程级组装（AppState）与默认数据路径
// ==========================================

pub mod state;

pub use state::{get_default_db_path, AppState};
