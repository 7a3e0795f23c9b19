// ==========================================
// 求职申请跟踪系统 - 手工录入载荷校验
// ==========================================
// 职责: 创建/更新求职记录的载荷校验
// 与导入行校验的差异: jobLink 在此强校验 URL 格式,
// 导入路径有意跳过该检查（历史兼容行为）
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::job::{JobUpdate, NewJob};

/// 字段长度上限（与持久化侧 schema 对齐）
const MAX_COMPANY_LEN: usize = 100;
const MAX_POSITION_LEN: usize = 100;
const MAX_NOTES_LEN: usize = 1000;

/// 校验创建载荷
///
/// 规则独立评估,全部违规以 "; " 拼接后返回
pub fn validate_new_job(job: &NewJob) -> ApiResult<()> {
    let mut errors: Vec<&str> = Vec::new();

    if job.company.trim().is_empty() {
        errors.push("Company is required");
    } else if job.company.chars().count() > MAX_COMPANY_LEN {
        errors.push("Company name is too long");
    }

    if job.position.trim().is_empty() {
        errors.push("Position is required");
    } else if job.position.chars().count() > MAX_POSITION_LEN {
        errors.push("Position is too long");
    }

    if let Some(notes) = job.notes.as_deref() {
        if notes.chars().count() > MAX_NOTES_LEN {
            errors.push("Notes are too long");
        }
    }

    if let Some(link) = job.job_link.as_deref() {
        if !link.is_empty() && !is_http_url(link) {
            errors.push("Please enter a valid URL");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::ValidationError(errors.join("; ")))
    }
}

/// 校验部分更新载荷（仅检查出现的字段）
pub fn validate_job_update(update: &JobUpdate) -> ApiResult<()> {
    if update.is_empty() {
        return Err(ApiError::InvalidInput("更新载荷为空".to_string()));
    }

    let mut errors: Vec<&str> = Vec::new();

    if let Some(company) = update.company.as_deref() {
        if company.trim().is_empty() {
            errors.push("Company is required");
        } else if company.chars().count() > MAX_COMPANY_LEN {
            errors.push("Company name is too long");
        }
    }

    if let Some(position) = update.position.as_deref() {
        if position.trim().is_empty() {
            errors.push("Position is required");
        } else if position.chars().count() > MAX_POSITION_LEN {
            errors.push("Position is too long");
        }
    }

    if let Some(Some(notes)) = update.notes.as_ref() {
        if notes.chars().count() > MAX_NOTES_LEN {
            errors.push("Notes are too long");
        }
    }

    if let Some(Some(link)) = update.job_link.as_ref() {
        if !link.is_empty() && !is_http_url(link) {
            errors.push("Please enter a valid URL");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::ValidationError(errors.join("; ")))
    }
}

/// http(s) URL 的最小形式检查
fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));

    match rest {
        Some(rest) => {
            let host = rest.split('/').next().unwrap_or("");
            !host.is_empty() && !rest.contains(char::is_whitespace)
        }
        None => false,
    }
}
