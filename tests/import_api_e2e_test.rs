// ==========================================
// ImportApi 端到端测试
// ==========================================
// 测试目标: 预览 → 确认提交 → 审计批次 全链路
// ==========================================

mod test_helpers;

use jobtrack::api::{ApiError, ImportApi};
use jobtrack::logging;
use test_helpers::{create_test_db, write_csv_file};

const TEST_USER: i64 = 1;

#[tokio::test]
async fn test_preview_commit_audit_roundtrip() {
    logging::init_test();

    let (_temp, db_path) = create_test_db().unwrap();
    let api = ImportApi::new(db_path.clone());

    let csv = write_csv_file(
        "Company,Position,Application Date,Status\n\
         Acme,Engineer,2024-01-15,Applied\n\
         ,Analyst,2024-01-16,Applied\n\
         Globex,Analyst,2024-01-20,Prospect\n",
    )
    .unwrap();

    // 预览: 精确的有效/无效计数与逐行错误文案
    let preview = api
        .preview_import(csv.path().to_str().unwrap())
        .unwrap();
    assert_eq!(preview.valid, 2);
    assert_eq!(preview.invalid, 1);
    assert_eq!(preview.result.errors[0].row, 2);
    assert!(preview.result.errors[0]
        .error
        .contains("Company name is required"));

    // 预览阶段绝不落库
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);

    // 提交: 三态汇总,报告实际落库条数
    let commit = api
        .commit_import(TEST_USER, &preview.result, Some("test_jobs.csv"))
        .await
        .unwrap();
    assert_eq!(commit.total_rows, 3);
    assert_eq!(commit.imported, 2);
    assert_eq!(commit.validation_rejected, 1);
    assert_eq!(commit.commit_rejected, 0);
    assert!(commit.failures.is_empty());

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);

    // 审计批次可查询
    let batches = api.list_recent_batches(TEST_USER, 10).await.unwrap();
    assert_eq!(batches.len(), 1);
    let batch = &batches[0];
    assert_eq!(batch.batch_id, commit.batch_id);
    assert_eq!(batch.file_name.as_deref(), Some("test_jobs.csv"));
    assert_eq!(batch.total_rows, 3);
    assert_eq!(batch.imported_rows, 2);
    assert_eq!(batch.validation_errors, 1);
    assert_eq!(batch.commit_errors, 0);
}

#[tokio::test]
async fn test_commit_without_valid_rows_rejected() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = ImportApi::new(db_path);

    let csv = write_csv_file("Company,Position,Application Date\n,Analyst,\n").unwrap();
    let preview = api.preview_import(csv.path().to_str().unwrap()).unwrap();
    assert_eq!(preview.valid, 0);
    assert_eq!(preview.invalid, 1);

    let result = api.commit_import(TEST_USER, &preview.result, None).await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[test]
fn test_preview_unsupported_file_reports_row_zero() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = ImportApi::new(db_path);

    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    std::io::Write::write_all(&mut file, b"junk").unwrap();

    let preview = api
        .preview_import(file.path().to_str().unwrap())
        .unwrap();

    assert_eq!(preview.valid, 0);
    assert_eq!(preview.invalid, 1);
    assert_eq!(preview.result.errors[0].row, 0);
    assert!(preview.result.errors[0]
        .error
        .contains("Unsupported file format"));
}

#[test]
fn test_preview_idempotent_across_calls() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = ImportApi::new(db_path);

    let csv = write_csv_file(
        "Company,Position,Application Date\nAcme,Engineer,2024-01-15\n,Analyst,bad\n",
    )
    .unwrap();
    let path = csv.path().to_str().unwrap();

    let first = api.preview_import(path).unwrap();
    let second = api.preview_import(path).unwrap();

    assert_eq!(
        serde_json::to_value(&first.result).unwrap(),
        serde_json::to_value(&second.result).unwrap()
    );
}
