// ==========================================
// 求职申请跟踪系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 文件级错误与行级校验错误分离:
//   - 行级错误收敛到 ImportResult.errors,不在此建模
//   - 此处仅建模文件级失败（对用户呈现为 row=0 的单条错误）
// ==========================================

use thiserror::Error;

/// 导入模块文件级错误
/// Display 文本直接面向用户（预览界面原样展示）
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {0}. Please use CSV or Excel files.")]
    UnsupportedFormat(String),

    #[error("Failed to read file: {0}")]
    FileReadError(String),

    #[error("Failed to parse Excel file: {0}")]
    ExcelParseError(String),

    #[error("Failed to parse CSV file: {0}")]
    CsvParseError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名（文件解析路径）
pub type ParseResult<T> = Result<T, ImportError>;
