// ==========================================
// 求职申请跟踪系统 - 批量提交器实现
// ==========================================
// 职责: 将确认后的记录逐条提交到持久化协作方
// 语义: settled 模式,严格按源顺序串行提交,
//       单条失败记录明细后继续,绝不中断批次
// ==========================================

use crate::domain::import::{CommitFailure, CommitOutcome, ImportedJob};
use crate::domain::job::NewJob;
use crate::repository::job_repo::JobRepository;
use tracing::{debug, warn};

pub struct BatchCommitter;

impl BatchCommitter {
    /// 逐条提交 accepted 列表
    ///
    /// # 参数
    /// - repo: 持久化协作方（求职记录创建操作）
    /// - user_id: 记录归属用户
    /// - accepted: 预览结果中的 success 列表（保持源文件顺序）
    ///
    /// # 返回
    /// - CommitOutcome: 实际落库条数 + 逐条失败明细（index 为 1 起的列表序号）
    pub async fn commit_all<R>(
        &self,
        repo: &R,
        user_id: i64,
        accepted: &[ImportedJob],
    ) -> CommitOutcome
    where
        R: JobRepository + ?Sized,
    {
        let mut outcome = CommitOutcome::default();

        for (idx, job) in accepted.iter().enumerate() {
            let submitted = match NewJob::try_from(job) {
                Ok(new_job) => repo
                    .create_job(user_id, new_job)
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string()),
                // 预览已归一化日期,此分支仅在调用方传入未经校验的数据时出现
                Err(e) => Err(format!("invalid record: {}", e)),
            };

            match submitted {
                Ok(()) => {
                    outcome.committed += 1;
                    debug!(index = idx + 1, company = %job.company, "记录提交成功");
                }
                Err(error) => {
                    warn!(
                        index = idx + 1,
                        company = %job.company,
                        error = %error,
                        "记录提交失败,继续后续记录"
                    );
                    outcome.failures.push(CommitFailure {
                        index: idx + 1,
                        company: job.company.clone(),
                        error,
                    });
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::{Job, JobFilter, JobSort, JobStatusCount, JobUpdate};
    use crate::domain::types::JobStatus;
    use crate::repository::error::{RepositoryError, RepositoryResult};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    // 指定公司名返回失败的桩仓储
    struct FailingRepo {
        fail_company: String,
        created: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl JobRepository for FailingRepo {
        async fn create_job(&self, user_id: i64, job: crate::domain::job::NewJob) -> RepositoryResult<Job> {
            if job.company == self.fail_company {
                return Err(RepositoryError::DatabaseQueryError("disk full".to_string()));
            }
            self.created.lock().unwrap().push(job.company.clone());
            let now = Utc::now();
            Ok(Job {
                id: 1,
                user_id,
                company: job.company,
                position: job.position,
                application_date: job.application_date,
                status: job.status,
                notes: job.notes,
                job_link: job.job_link,
                follow_up_date: job.follow_up_date,
                created_at: now,
                updated_at: now,
            })
        }

        async fn get_job(&self, _: i64, _: i64) -> RepositoryResult<Option<Job>> {
            unimplemented!()
        }

        async fn list_jobs(
            &self,
            _: i64,
            _: &JobFilter,
            _: JobSort,
        ) -> RepositoryResult<Vec<Job>> {
            unimplemented!()
        }

        async fn update_job(&self, _: i64, _: i64, _: JobUpdate) -> RepositoryResult<Job> {
            unimplemented!()
        }

        async fn delete_job(&self, _: i64, _: i64) -> RepositoryResult<bool> {
            unimplemented!()
        }

        async fn count_by_status(&self, _: i64) -> RepositoryResult<Vec<JobStatusCount>> {
            unimplemented!()
        }
    }

    fn job(company: &str) -> ImportedJob {
        ImportedJob {
            company: company.to_string(),
            position: "Engineer".to_string(),
            application_date: "2024-01-15".to_string(),
            status: JobStatus::Applied,
            notes: String::new(),
            job_link: String::new(),
            follow_up_date: String::new(),
        }
    }

    #[tokio::test]
    async fn test_single_failure_does_not_abort_batch() {
        let repo = FailingRepo {
            fail_company: "Globex".to_string(),
            created: Mutex::new(Vec::new()),
        };
        let accepted = vec![job("Acme"), job("Globex"), job("Initech")];

        let outcome = BatchCommitter.commit_all(&repo, 1, &accepted).await;

        // 失败行之后的记录仍被提交
        assert_eq!(outcome.committed, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].index, 2);
        assert_eq!(outcome.failures[0].company, "Globex");
        assert!(outcome.failures[0].error.contains("disk full"));
        assert_eq!(
            *repo.created.lock().unwrap(),
            vec!["Acme".to_string(), "Initech".to_string()]
        );
    }

    #[tokio::test]
    async fn test_commit_preserves_source_order() {
        let repo = FailingRepo {
            fail_company: String::new(),
            created: Mutex::new(Vec::new()),
        };
        let accepted = vec![job("A"), job("B"), job("C")];

        let outcome = BatchCommitter.commit_all(&repo, 1, &accepted).await;

        assert_eq!(outcome.committed, 3);
        assert!(outcome.failures.is_empty());
        assert_eq!(
            *repo.created.lock().unwrap(),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
    }
}
