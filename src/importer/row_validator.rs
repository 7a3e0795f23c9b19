// ==========================================
// 求职申请跟踪系统 - 行校验器实现
// ==========================================
// 职责: 逐字段校验 + ImportedJob 构造
// 规则独立评估,全部违规收集后以 "; " 拼接（不短路）
// 错误文案为用户可见契约,不得改动
// ==========================================

use crate::domain::import::{ImportedJob, RawRow};
use crate::domain::types::JobStatus;
use crate::importer::job_importer_trait::RowValidator as RowValidatorTrait;
use chrono::{NaiveDate, NaiveDateTime};

/// 宽容日期解析接受的格式（按命中率排序）
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%b %d, %Y",
    "%d %b %Y",
];

/// 带时间的格式（Excel 导出常见,取日期部分）
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// 宽容解析日期文本
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }

    None
}

pub struct JobRowValidator;

impl JobRowValidator {
    /// 提取字段并去空白（缺席与空白等价）
    fn field<'a>(&self, row: &'a RawRow, key: &str) -> &'a str {
        row.fields.get(key).map(|v| v.trim()).unwrap_or("")
    }
}

impl RowValidatorTrait for JobRowValidator {
    fn validate_row(&self, row: &RawRow) -> Result<ImportedJob, String> {
        let mut errors: Vec<String> = Vec::new();

        // 规则 1: company 必填
        let company = self.field(row, "company");
        if company.is_empty() {
            errors.push("Company name is required".to_string());
        }

        // 规则 2: position 必填
        let position = self.field(row, "position");
        if position.is_empty() {
            errors.push("Position is required".to_string());
        }

        // 规则 3: applicationDate 必填且可解析
        let date_raw = self.field(row, "applicationDate");
        let mut application_date: Option<NaiveDate> = None;
        if date_raw.is_empty() {
            errors.push("Application date is required".to_string());
        } else {
            match parse_flexible_date(date_raw) {
                Some(date) => application_date = Some(date),
                None => errors.push("Invalid application date format".to_string()),
            }
        }

        // 规则 4: status 若存在必须属于闭集; 缺席不报错（构造时缺省）
        let status_raw = self.field(row, "status");
        let mut status = JobStatus::Applied; // 导入缺省值
        if !status_raw.is_empty() {
            match status_raw.parse::<JobStatus>() {
                Ok(parsed) => status = parsed,
                Err(_) => errors.push(format!(
                    "Invalid status. Must be one of: {}",
                    JobStatus::valid_values()
                )),
            }
        }

        if !errors.is_empty() {
            return Err(errors.join("; "));
        }

        // 可选字段: trim 后原样保留,缺席为空串
        // followUpDate 解析失败时静默置空（不产生行错误）
        let follow_up_date = parse_flexible_date(self.field(row, "followUpDate"))
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        Ok(ImportedJob {
            company: company.to_string(),
            position: position.to_string(),
            application_date: application_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            status,
            notes: self.field(row, "notes").to_string(),
            job_link: self.field(row, "jobLink").to_string(),
            follow_up_date,
        })
    }
}
