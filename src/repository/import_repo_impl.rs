// ==========================================
// 求职申请跟踪系统 - 导入审计 Repository 实现
// ==========================================
// 职责: 实现导入批次审计记录的数据访问（使用 rusqlite）
// ==========================================

use crate::domain::import::ImportBatch;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::import_repo::ImportAuditRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// ImportAuditRepositoryImpl
// ==========================================
pub struct ImportAuditRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl ImportAuditRepositoryImpl {
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

    fn row_to_batch(row: &rusqlite::Row<'_>) -> rusqlite::Result<ImportBatch> {
        Ok(ImportBatch {
            batch_id: row.get(0)?,
            user_id: row.get(1)?,
            file_name: row.get(2)?,
            total_rows: row.get(3)?,
            imported_rows: row.get(4)?,
            validation_errors: row.get(5)?,
            commit_errors: row.get(6)?,
            imported_at: row.get(7)?,
            elapsed_ms: row.get(8)?,
        })
    }
}

#[async_trait]
impl ImportAuditRepository for ImportAuditRepositoryImpl {
    async fn insert_batch(&self, batch: ImportBatch) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            INSERT INTO import_batch (
                batch_id, user_id, file_name, total_rows, imported_rows,
                validation_errors, commit_errors, imported_at, elapsed_ms
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                batch.batch_id,
                batch.user_id,
                batch.file_name,
                batch.total_rows,
                batch.imported_rows,
                batch.validation_errors,
                batch.commit_errors,
                batch.imported_at,
                batch.elapsed_ms,
            ],
        )?;

        Ok(())
    }

    async fn recent_batches(
        &self,
        user_id: i64,
        limit: usize,
    ) -> RepositoryResult<Vec<ImportBatch>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT batch_id, user_id, file_name, total_rows, imported_rows,
                   validation_errors, commit_errors, imported_at, elapsed_ms
            FROM import_batch
            WHERE user_id = ?1
            ORDER BY imported_at DESC
            LIMIT ?2
            "#,
        )?;

        let batches = stmt
            .query_map(params![user_id, limit as i64], Self::row_to_batch)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(batches)
    }
}
