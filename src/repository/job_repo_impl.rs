// ==========================================
// 求职申请跟踪系统 - 求职记录 Repository 实现
// ==========================================
// 职责: 实现求职记录数据访问（使用 rusqlite）
// 红线: Repository 不含业务规则,只做数据 CRUD
// ==========================================

use crate::domain::job::{Job, JobFilter, JobSort, JobStatusCount, JobUpdate, NewJob};
use crate::domain::types::{JobStatus, SortKey, SortOrder};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::job_repo::JobRepository;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::types::ToSql;
use rusqlite::{params, params_from_iter, Connection};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

const JOB_COLUMNS: &str = "id, user_id, company, position, application_date, status, \
                           notes, job_link, follow_up_date, created_at, updated_at";

// ==========================================
// JobRepositoryImpl
// ==========================================
pub struct JobRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl JobRepositoryImpl {
    /// 创建新的 Repository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
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

    /// 行 → Job（列顺序与 JOB_COLUMNS 对齐）
    fn row_to_job(row: &rusqlite::Row<'_>) -> rusqlite::Result<Job> {
        let status_raw: String = row.get(5)?;
        let status = status_raw.parse::<JobStatus>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, e.into())
        })?;

        Ok(Job {
            id: row.get(0)?,
            user_id: row.get(1)?,
            company: row.get(2)?,
            position: row.get(3)?,
            application_date: row.get(4)?,
            status,
            notes: row.get(6)?,
            job_link: row.get(7)?,
            follow_up_date: row.get(8)?,
            created_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }

    fn query_job(
        conn: &Connection,
        user_id: i64,
        job_id: i64,
    ) -> RepositoryResult<Option<Job>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM jobs WHERE id = ?1 AND user_id = ?2",
            JOB_COLUMNS
        ))?;

        let mut rows = stmt.query_map(params![job_id, user_id], Self::row_to_job)?;
        match rows.next() {
            Some(job) => Ok(Some(job?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl JobRepository for JobRepositoryImpl {
    async fn create_job(&self, user_id: i64, job: NewJob) -> RepositoryResult<Job> {
        let conn = self.lock_conn()?;
        let now = Utc::now();

        conn.execute(
            r#"
            INSERT INTO jobs (
                user_id, company, position, application_date, status,
                notes, job_link, follow_up_date, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                user_id,
                job.company,
                job.position,
                job.application_date,
                job.status.to_string(),
                job.notes,
                job.job_link,
                job.follow_up_date,
                now,
                now,
            ],
        )?;

        Ok(Job {
            id: conn.last_insert_rowid(),
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

    async fn get_job(&self, user_id: i64, job_id: i64) -> RepositoryResult<Option<Job>> {
        let conn = self.lock_conn()?;
        Self::query_job(&conn, user_id, job_id)
    }

    async fn list_jobs(
        &self,
        user_id: i64,
        filter: &JobFilter,
        sort: JobSort,
    ) -> RepositoryResult<Vec<Job>> {
        let conn = self.lock_conn()?;

        let mut sql = format!("SELECT {} FROM jobs WHERE user_id = ?", JOB_COLUMNS);
        let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(user_id)];

        if let Some(status) = filter.status {
            sql.push_str(" AND status = ?");
            params.push(Box::new(status.to_string()));
        }

        if let Some(search) = filter.search.as_deref() {
            let search = search.trim().to_lowercase();
            if !search.is_empty() {
                sql.push_str(
                    " AND (LOWER(company) LIKE ? OR LOWER(position) LIKE ? \
                     OR LOWER(IFNULL(notes, '')) LIKE ?)",
                );
                let pattern = format!("%{}%", search);
                params.push(Box::new(pattern.clone()));
                params.push(Box::new(pattern.clone()));
                params.push(Box::new(pattern));
            }
        }

        if let Some(from) = filter.date_from {
            sql.push_str(" AND application_date >= ?");
            params.push(Box::new(from));
        }
        if let Some(to) = filter.date_to {
            sql.push_str(" AND application_date <= ?");
            params.push(Box::new(to));
        }

        // 排序键白名单映射（禁止拼接任意列名）
        let column = match sort.key {
            SortKey::Company => "company COLLATE NOCASE",
            SortKey::Position => "position COLLATE NOCASE",
            SortKey::ApplicationDate => "application_date",
            SortKey::Status => "status",
        };
        let direction = match sort.order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        sql.push_str(&format!(" ORDER BY {} {}, id ASC", column, direction));

        let mut stmt = conn.prepare(&sql)?;
        let jobs = stmt
            .query_map(
                params_from_iter(params.iter().map(|p| p.as_ref())),
                Self::row_to_job,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(jobs)
    }

    async fn update_job(
        &self,
        user_id: i64,
        job_id: i64,
        update: JobUpdate,
    ) -> RepositoryResult<Job> {
        let conn = self.lock_conn()?;

        let mut job = Self::query_job(&conn, user_id, job_id)?.ok_or_else(|| {
            RepositoryError::NotFound {
                entity: "Job".to_string(),
                id: job_id.to_string(),
            }
        })?;

        if let Some(company) = update.company {
            job.company = company;
        }
        if let Some(position) = update.position {
            job.position = position;
        }
        if let Some(date) = update.application_date {
            job.application_date = date;
        }
        if let Some(status) = update.status {
            job.status = status;
        }
        if let Some(notes) = update.notes {
            job.notes = notes;
        }
        if let Some(link) = update.job_link {
            job.job_link = link;
        }
        if let Some(follow_up) = update.follow_up_date {
            job.follow_up_date = follow_up;
        }
        job.updated_at = Utc::now();

        conn.execute(
            r#"
            UPDATE jobs SET
                company = ?1, position = ?2, application_date = ?3, status = ?4,
                notes = ?5, job_link = ?6, follow_up_date = ?7, updated_at = ?8
            WHERE id = ?9 AND user_id = ?10
            "#,
            params![
                job.company,
                job.position,
                job.application_date,
                job.status.to_string(),
                job.notes,
                job.job_link,
                job.follow_up_date,
                job.updated_at,
                job_id,
                user_id,
            ],
        )?;

        Ok(job)
    }

    async fn delete_job(&self, user_id: i64, job_id: i64) -> RepositoryResult<bool> {
        let conn = self.lock_conn()?;
        let affected = conn.execute(
            "DELETE FROM jobs WHERE id = ?1 AND user_id = ?2",
            params![job_id, user_id],
        )?;
        Ok(affected > 0)
    }

    async fn count_by_status(&self, user_id: i64) -> RepositoryResult<Vec<JobStatusCount>> {
        let conn = self.lock_conn()?;

        let mut stmt =
            conn.prepare("SELECT status, COUNT(*) FROM jobs WHERE user_id = ?1 GROUP BY status")?;
        let counts: HashMap<String, i64> = stmt
            .query_map(params![user_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<Result<HashMap<_, _>, _>>()?;

        // 闭集内每个状态都出一条（缺席补 0）
        Ok(JobStatus::ALL
            .iter()
            .map(|status| JobStatusCount {
                status: *status,
                count: counts.get(status.as_str()).copied().unwrap_or(0),
            })
            .collect())
    }
}
