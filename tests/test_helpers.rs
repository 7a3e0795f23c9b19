// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、测试数据生成等功能
// ==========================================

use jobtrack::domain::job::NewJob;
use jobtrack::domain::types::JobStatus;
use rusqlite::Connection;
use std::error::Error;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    let conn = Connection::open(&db_path)?;
    jobtrack::db::init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 写临时 CSV 文件（带 .csv 扩展名）
#[allow(dead_code)]
pub fn write_csv_file(content: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = Builder::new().suffix(".csv").tempfile()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

/// 构造一条合法的创建载荷
#[allow(dead_code)]
pub fn sample_new_job(company: &str) -> NewJob {
    NewJob {
        company: company.to_string(),
        position: "Engineer".to_string(),
        application_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        status: JobStatus::Prospect,
        notes: None,
        job_link: None,
        follow_up_date: None,
    }
}
