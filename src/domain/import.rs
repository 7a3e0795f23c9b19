// ==========================================
// 求职申请跟踪系统 - 导入领域模型
// ==========================================
// 用途: 导入管道中间产物与结果结构
// 生命周期: 预览结果在确认提交或取消后即丢弃
// ==========================================

use crate::domain::job::NewJob;
use crate::domain::types::JobStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// RawRow - 原始行记录
// ==========================================
// 用途: 文件解析产物（列名 → 单元格文本）
// row_number: 原始文件中的数据行号（1 起,不含表头）,
//             跳过的空行不改变后续行的编号
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRow {
    pub row_number: usize,
    pub fields: HashMap<String, String>,
}

impl RawRow {
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.trim().is_empty())
    }
}

// ==========================================
// ParsedFile - 文件解析结果
// ==========================================
// headers: 文件中实际出现的原始表头（未归一化）
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

// ==========================================
// ImportedJob - 校验通过的导入记录
// ==========================================
// 瞬态结构,本模块不落库; JSON 字段名与前端契约一致
// 日期统一为 ISO YYYY-MM-DD 文本,可选字段缺省为空串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedJob {
    pub company: String,
    pub position: String,
    pub application_date: String,
    pub status: JobStatus,
    pub notes: String,
    pub job_link: String,
    pub follow_up_date: String,
}

impl TryFrom<&ImportedJob> for NewJob {
    type Error = chrono::ParseError;

    // 空串可选字段落库为 NULL（与手工录入接口一致）
    fn try_from(job: &ImportedJob) -> Result<Self, Self::Error> {
        let application_date = NaiveDate::parse_from_str(&job.application_date, "%Y-%m-%d")?;
        let follow_up_date = if job.follow_up_date.is_empty() {
            None
        } else {
            Some(NaiveDate::parse_from_str(&job.follow_up_date, "%Y-%m-%d")?)
        };

        Ok(NewJob {
            company: job.company.clone(),
            position: job.position.clone(),
            application_date,
            status: job.status,
            notes: (!job.notes.is_empty()).then(|| job.notes.clone()),
            job_link: (!job.job_link.is_empty()).then(|| job.job_link.clone()),
            follow_up_date,
        })
    }
}

// ==========================================
// RowError - 行级错误
// ==========================================
// row=0 表示文件级错误（不支持的格式/损坏文件）
// data: 出错行的归一化字段快照,供用户定位修正
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowError {
    pub row: usize,
    pub error: String,
    pub data: HashMap<String, String>,
}

// ==========================================
// ImportResult - 导入预览结果
// ==========================================
// 不变量: 每个数据行恰好进入 success/errors 之一
// 两个分区均保持源文件行序
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportResult {
    pub success: Vec<ImportedJob>,
    pub errors: Vec<RowError>,
}

impl ImportResult {
    /// 数据行总数（success + errors）
    pub fn total_rows(&self) -> usize {
        self.success.len() + self.errors.len()
    }

    /// 文件级失败的统一表示（单条 row=0 错误）
    pub fn from_file_error(message: String) -> Self {
        ImportResult {
            success: Vec::new(),
            errors: vec![RowError {
                row: 0,
                error: message,
                data: HashMap::new(),
            }],
        }
    }
}

// ==========================================
// CommitFailure - 单条提交失败
// ==========================================
// index: 在 success 列表中的序号（1 起）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitFailure {
    pub index: usize,
    pub company: String,
    pub error: String,
}

// ==========================================
// CommitOutcome - 批量提交结果（settled 模式）
// ==========================================
// 单条失败不中断批次; committed 为实际落库条数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitOutcome {
    pub committed: usize,
    pub failures: Vec<CommitFailure>,
}

// ==========================================
// ImportBatch - 导入批次审计记录
// ==========================================
// 用途: 每次确认提交后写一条,支撑导入历史查询
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBatch {
    pub batch_id: String,               // 批次 ID（UUID）
    pub user_id: i64,
    pub file_name: Option<String>,      // 源文件名
    pub total_rows: i64,                // 数据行总数
    pub imported_rows: i64,             // 实际落库条数
    pub validation_errors: i64,         // 校验拒绝条数
    pub commit_errors: i64,             // 提交失败条数
    pub imported_at: DateTime<Utc>,     // 提交时间
    pub elapsed_ms: i64,                // 提交耗时（毫秒）
}
