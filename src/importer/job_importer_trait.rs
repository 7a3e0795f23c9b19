// ==========================================
// 求职申请跟踪系统 - 导入管道 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 流程: 文件解析 → 表头归一化 → 行校验 → 预览分区 → (确认) → 批量提交
// ==========================================

use crate::domain::import::{CommitOutcome, ImportResult, ImportedJob, ParsedFile, RawRow};
use crate::importer::error::ParseResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录与原始表头
    ///
    /// # 参数
    /// - file_path: 文件路径（扩展名决定解析路径: csv/xls/xlsx）
    ///
    /// # 返回
    /// - Ok(ParsedFile): 表头 + 行记录（行号按文件位置编号,跳过全空行）
    /// - Err(ImportError): 文件级错误（不存在/格式不支持/损坏）
    fn parse_rows(&self, file_path: &Path) -> ParseResult<ParsedFile>;
}

// ==========================================
// HeaderNormalizer Trait
// ==========================================
// 用途: 表头归一化接口（阶段 1）,CSV 与表格输入走同一实现
pub trait HeaderNormalizer: Send + Sync {
    /// 原始表头 → 规范字段键
    ///
    /// 规则: 小写 + 去空白,再查固定别名表; 未命中者原样透传（已小写/去空白）
    fn normalize_header(&self, header: &str) -> String;

    /// 将整行的键归一化（值不变,行号不变）
    fn normalize_row(&self, row: RawRow) -> RawRow;
}

// ==========================================
// RowValidator Trait
// ==========================================
// 用途: 单行校验接口（阶段 2）
pub trait RowValidator: Send + Sync {
    /// 校验一条归一化行记录
    ///
    /// # 返回
    /// - Ok(ImportedJob): 全部规则通过,字段已整理（trim/ISO 日期/状态缺省）
    /// - Err(String): 全部违规信息以 "; " 拼接（不短路,逐条收集）
    fn validate_row(&self, row: &RawRow) -> Result<ImportedJob, String>;
}

// ==========================================
// JobImporter Trait
// ==========================================
// 用途: 导入主接口（预览 + 确认提交两段式,预览绝不落库）
// 实现者: JobImporterImpl
#[async_trait]
pub trait JobImporter: Send + Sync {
    /// 解析并校验文件,生成预览分区
    ///
    /// # 返回
    /// - ImportResult: 每个数据行恰好落入 success/errors 之一;
    ///   文件级失败表示为单条 row=0 错误（不中断调用方）
    fn preview<P: AsRef<Path>>(&self, file_path: P) -> ImportResult;

    /// 提交已确认的记录（settled 模式）
    ///
    /// # 参数
    /// - user_id: 记录归属用户
    /// - accepted: 预览结果中的 success 列表
    ///
    /// # 语义
    /// - 严格按源文件顺序逐条提交,单条失败记录后继续
    /// - 返回实际落库条数与逐条失败明细
    async fn commit(&self, user_id: i64, accepted: &[ImportedJob]) -> CommitOutcome;
}
