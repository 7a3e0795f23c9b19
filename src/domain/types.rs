// ==========================================
// 求职申请跟踪系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 求职状态 (Job Status)
// ==========================================
// 闭集: 导入与手工录入共用同一组状态
// 序列化格式: 与前端/导出文件一致的原文（"Prospect" 等）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Prospect,    // 意向（手工录入默认值）
    Applied,     // 已投递（导入默认值）
    Ghosted,     // 无回应
    Interviewed, // 已面试
    Rejected,    // 已拒绝
    Hired,       // 已录用
}

impl JobStatus {
    /// 全部合法状态（顺序即错误提示中的枚举顺序）
    pub const ALL: [JobStatus; 6] = [
        JobStatus::Prospect,
        JobStatus::Applied,
        JobStatus::Ghosted,
        JobStatus::Interviewed,
        JobStatus::Rejected,
        JobStatus::Hired,
    ];

    /// 合法状态的逗号拼接（用于校验错误提示）
    pub fn valid_values() -> String {
        JobStatus::ALL
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Prospect => "Prospect",
            JobStatus::Applied => "Applied",
            JobStatus::Ghosted => "Ghosted",
            JobStatus::Interviewed => "Interviewed",
            JobStatus::Rejected => "Rejected",
            JobStatus::Hired => "Hired",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    // 严格匹配原文（大小写敏感，与源文件/前端保持一致）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Prospect" => Ok(JobStatus::Prospect),
            "Applied" => Ok(JobStatus::Applied),
            "Ghosted" => Ok(JobStatus::Ghosted),
            "Interviewed" => Ok(JobStatus::Interviewed),
            "Rejected" => Ok(JobStatus::Rejected),
            "Hired" => Ok(JobStatus::Hired),
            other => Err(format!("未知求职状态: {}", other)),
        }
    }
}

// ==========================================
// 列表排序键 (Sort Key)
// ==========================================
// 对齐前端列表/表格的可排序列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Company,
    Position,
    ApplicationDate,
    Status,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::ApplicationDate
    }
}

// ==========================================
// 排序方向 (Sort Order)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

// ==========================================
// 看板/表格视图 (View Mode)
// ==========================================
// 仅作为偏好设置的取值，不涉及渲染
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Kanban,
    Table,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Kanban
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Kanban => write!(f, "kanban"),
            ViewMode::Table => write!(f, "table"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kanban" => Ok(ViewMode::Kanban),
            "table" => Ok(ViewMode::Table),
            other => Err(format!("未知视图模式: {}", other)),
        }
    }
}
