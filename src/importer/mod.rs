// ==========================================
// 求职申请跟踪系统 - 导入层
// ==========================================
// 职责: 外部文件导入,生成内部求职记录
// 支持: Excel (.xlsx/.xls), CSV (.csv)
// 两段式: 预览（纯函数,不落库）→ 用户确认 → 批量提交
// ==========================================

// 模块声明
pub mod batch_committer;
pub mod error;
pub mod file_parser;
pub mod header_normalizer;
pub mod job_importer_impl;
pub mod job_importer_trait;
pub mod row_validator;

// 重导出核心类型
pub use batch_committer::BatchCommitter;
pub use error::{ImportError, ParseResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use header_normalizer::JobHeaderNormalizer;
pub use job_importer_impl::JobImporterImpl;
pub use row_validator::{parse_flexible_date, JobRowValidator};

// 重导出 Trait 接口
pub use job_importer_trait::{FileParser, HeaderNormalizer, JobImporter, RowValidator};
