// ==========================================
// JobApi 集成测试
// ==========================================
// 测试目标: CRUD / 列表过滤排序 / 统计 / CSV 导出
// ==========================================

mod test_helpers;

use chrono::NaiveDate;
use jobtrack::api::{ApiError, JobApi};
use jobtrack::domain::job::{JobFilter, JobSort, JobUpdate, NewJob};
use jobtrack::domain::types::{JobStatus, SortKey, SortOrder};
use jobtrack::repository::JobRepositoryImpl;
use std::sync::Arc;
use test_helpers::{create_test_db, sample_new_job};

const TEST_USER: i64 = 1;
const OTHER_USER: i64 = 2;

fn create_api(db_path: &str) -> JobApi {
    let repo = Arc::new(JobRepositoryImpl::new(db_path).expect("Failed to create repo"));
    JobApi::new(repo)
}

fn job(company: &str, position: &str, date: (i32, u32, u32), status: JobStatus) -> NewJob {
    NewJob {
        company: company.to_string(),
        position: position.to_string(),
        application_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        status,
        notes: None,
        job_link: None,
        follow_up_date: None,
    }
}

#[tokio::test]
async fn test_create_and_get_job() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = create_api(&db_path);

    let created = api
        .create_job(TEST_USER, sample_new_job("Acme"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.status, JobStatus::Prospect);

    let fetched = api.get_job(TEST_USER, created.id).await.unwrap();
    assert_eq!(fetched.company, "Acme");

    // 其他用户不可见
    let result = api.get_job(OTHER_USER, created.id).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_create_job_validation_errors() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = create_api(&db_path);

    let mut bad = sample_new_job("");
    bad.job_link = Some("ftp://nope".to_string());

    let err = api.create_job(TEST_USER, bad).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Company is required"));
    assert!(msg.contains("Please enter a valid URL"));
}

#[tokio::test]
async fn test_update_job_status_kanban_reassignment() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = create_api(&db_path);

    let created = api
        .create_job(TEST_USER, sample_new_job("Acme"))
        .await
        .unwrap();

    // 看板拖拽换列: 仅更新 status
    let update = JobUpdate {
        status: Some(JobStatus::Interviewed),
        ..Default::default()
    };
    let updated = api.update_job(TEST_USER, created.id, update).await.unwrap();

    assert_eq!(updated.status, JobStatus::Interviewed);
    assert_eq!(updated.company, "Acme");
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_missing_job_not_found() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = create_api(&db_path);

    let update = JobUpdate {
        status: Some(JobStatus::Rejected),
        ..Default::default()
    };
    let result = api.update_job(TEST_USER, 999, update).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_job() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = create_api(&db_path);

    let created = api
        .create_job(TEST_USER, sample_new_job("Acme"))
        .await
        .unwrap();

    api.delete_job(TEST_USER, created.id).await.unwrap();

    let result = api.get_job(TEST_USER, created.id).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));

    // 重复删除报未找到
    let result = api.delete_job(TEST_USER, created.id).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_list_jobs_filters() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = create_api(&db_path);

    api.create_job(TEST_USER, job("Acme", "Engineer", (2024, 1, 10), JobStatus::Applied))
        .await
        .unwrap();
    api.create_job(TEST_USER, job("Globex", "Analyst", (2024, 2, 5), JobStatus::Rejected))
        .await
        .unwrap();
    api.create_job(TEST_USER, job("Initech", "Engineer", (2024, 3, 1), JobStatus::Applied))
        .await
        .unwrap();
    // 其他用户的数据不应出现
    api.create_job(OTHER_USER, job("Hooli", "Engineer", (2024, 1, 10), JobStatus::Applied))
        .await
        .unwrap();

    // 状态过滤
    let filter = JobFilter {
        status: Some(JobStatus::Applied),
        ..Default::default()
    };
    let jobs = api
        .list_jobs(TEST_USER, &filter, JobSort::default())
        .await
        .unwrap();
    assert_eq!(jobs.len(), 2);

    // 关键词过滤（大小写不敏感）
    let filter = JobFilter {
        search: Some("ENGINEER".to_string()),
        ..Default::default()
    };
    let jobs = api
        .list_jobs(TEST_USER, &filter, JobSort::default())
        .await
        .unwrap();
    assert_eq!(jobs.len(), 2);

    // 日期区间过滤
    let filter = JobFilter {
        date_from: Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
        date_to: Some(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()),
        ..Default::default()
    };
    let jobs = api
        .list_jobs(TEST_USER, &filter, JobSort::default())
        .await
        .unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company, "Globex");

    // 非法区间
    let filter = JobFilter {
        date_from: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        date_to: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        ..Default::default()
    };
    let result = api.list_jobs(TEST_USER, &filter, JobSort::default()).await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}

#[tokio::test]
async fn test_list_jobs_sorting() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = create_api(&db_path);

    api.create_job(TEST_USER, job("beta", "Engineer", (2024, 1, 10), JobStatus::Applied))
        .await
        .unwrap();
    api.create_job(TEST_USER, job("Alpha", "Analyst", (2024, 3, 1), JobStatus::Applied))
        .await
        .unwrap();
    api.create_job(TEST_USER, job("Gamma", "Manager", (2024, 2, 5), JobStatus::Applied))
        .await
        .unwrap();

    // 默认: 投递日期倒序
    let jobs = api
        .list_jobs(TEST_USER, &JobFilter::default(), JobSort::default())
        .await
        .unwrap();
    let companies: Vec<&str> = jobs.iter().map(|j| j.company.as_str()).collect();
    assert_eq!(companies, vec!["Alpha", "Gamma", "beta"]);

    // 公司名升序（大小写不敏感）
    let sort = JobSort {
        key: SortKey::Company,
        order: SortOrder::Asc,
    };
    let jobs = api
        .list_jobs(TEST_USER, &JobFilter::default(), sort)
        .await
        .unwrap();
    let companies: Vec<&str> = jobs.iter().map(|j| j.company.as_str()).collect();
    assert_eq!(companies, vec!["Alpha", "beta", "Gamma"]);
}

#[tokio::test]
async fn test_job_stats_counts_full_closed_set() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = create_api(&db_path);

    api.create_job(TEST_USER, job("A", "E", (2024, 1, 1), JobStatus::Applied))
        .await
        .unwrap();
    api.create_job(TEST_USER, job("B", "E", (2024, 1, 2), JobStatus::Applied))
        .await
        .unwrap();
    api.create_job(TEST_USER, job("C", "E", (2024, 1, 3), JobStatus::Hired))
        .await
        .unwrap();

    let stats = api.get_job_stats(TEST_USER).await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.counts.len(), 6, "闭集内每个状态一条");

    let applied = stats
        .counts
        .iter()
        .find(|c| c.status == JobStatus::Applied)
        .unwrap();
    assert_eq!(applied.count, 2);

    let ghosted = stats
        .counts
        .iter()
        .find(|c| c.status == JobStatus::Ghosted)
        .unwrap();
    assert_eq!(ghosted.count, 0);
}

#[tokio::test]
async fn test_export_jobs_csv() {
    let (_temp, db_path) = create_test_db().unwrap();
    let api = create_api(&db_path);

    // 无记录时报 No jobs to export
    let result = api.export_jobs_csv(TEST_USER).await;
    match result {
        Err(ApiError::NotFound(msg)) => assert!(msg.contains("No jobs to export")),
        other => panic!("Expected NotFound, got {:?}", other),
    }

    let mut with_optionals = job("Acme", "Engineer", (2024, 1, 15), JobStatus::Applied);
    with_optionals.notes = Some("Phone screen done".to_string());
    with_optionals.job_link = Some("https://acme.example/jobs/1".to_string());
    api.create_job(TEST_USER, with_optionals).await.unwrap();
    api.create_job(TEST_USER, job("Globex", "Analyst", (2024, 2, 1), JobStatus::Prospect))
        .await
        .unwrap();

    let export = api.export_jobs_csv(TEST_USER).await.unwrap();

    assert!(export.filename.starts_with("jobs-"));
    assert!(export.filename.ends_with(".csv"));

    let mut lines = export.content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Company,Position,Application Date,Status,Notes,Job Link,Follow-up Date,Created At"
    );

    let first = lines.next().unwrap();
    assert!(first.starts_with("Acme,Engineer,2024-01-15,Applied,Phone screen done,"));
    let second = lines.next().unwrap();
    assert!(second.starts_with("Globex,Analyst,2024-02-01,Prospect,,,"));
    assert!(lines.next().is_none());
}
