// ==========================================
// 求职申请跟踪系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 行号口径: 数据行在源文件中的位置（1 起,不含表头）,
//           跳过的全空行不压缩后续行号
// ==========================================

use crate::domain::import::{ParsedFile, RawRow};
use crate::importer::error::{ImportError, ParseResult};
use crate::importer::job_importer_trait::FileParser;
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_rows(&self, file_path: &Path) -> ParseResult<ParsedFile> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let mut fields = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    fields.insert(header.clone(), value.trim().to_string());
                }
            }

            let row = RawRow {
                row_number: row_idx + 1,
                fields,
            };

            // 跳过完全空白的行（行号不压缩）
            if row.is_blank() {
                continue;
            }

            rows.push(row);
        }

        Ok(ParsedFile { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_rows(&self, file_path: &Path) -> ParseResult<ParsedFile> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开工作簿（按扩展名自动选择后端）
        let mut workbook = open_workbook_auto(path)?;

        // 仅读取第一个工作表（按位置,不按名称）
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no sheets".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // 第一行为表头
        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("first sheet is empty".to_string()))?;

        let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();

        // 读取数据行（短行按位置对齐,缺失列视为字段缺席）
        let mut rows = Vec::new();
        for (row_idx, data_row) in sheet_rows.enumerate() {
            let mut fields = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    fields.insert(header.clone(), cell_to_string(cell));
                }
            }

            let row = RawRow {
                row_number: row_idx + 1,
                fields,
            };

            // 跳过完全空白的行（行号不压缩）
            if row.is_blank() {
                continue;
            }

            rows.push(row);
        }

        Ok(ParsedFile { headers, rows })
    }
}

/// 单元格 → 文本
/// 日期单元格先转 ISO 文本,数值去掉无意义的小数尾巴,
/// 保证后续校验与 CSV 路径行为一致
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|ndt| ndt.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(s) => s.trim().to_string(),
        Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(_) => String::new(),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_rows(&self, file_path: &Path) -> ParseResult<ParsedFile> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_rows(file_path),
            "xlsx" | "xls" => ExcelParser.parse_rows(file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let temp_file = write_csv("Company,Position,Status\nAcme,Engineer,Applied\nGlobex,Analyst,Prospect\n");

        let parsed = CsvParser.parse_rows(temp_file.path()).unwrap();

        assert_eq!(parsed.headers, vec!["Company", "Position", "Status"]);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0].row_number, 1);
        assert_eq!(
            parsed.rows[0].fields.get("Company"),
            Some(&"Acme".to_string())
        );
        assert_eq!(
            parsed.rows[1].fields.get("Position"),
            Some(&"Analyst".to_string())
        );
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_rows(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows_keeps_numbering() {
        let temp_file = write_csv("Company,Position\nAcme,Engineer\n,\nGlobex,Analyst\n");

        let parsed = CsvParser.parse_rows(temp_file.path()).unwrap();

        // 空行被跳过,但后续行号仍按文件位置
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[0].row_number, 1);
        assert_eq!(parsed.rows[1].row_number, 3);
    }

    #[test]
    fn test_csv_parser_short_row_yields_missing_fields() {
        let temp_file = write_csv("Company,Position,Status\nAcme,Engineer\n");

        let parsed = CsvParser.parse_rows(temp_file.path()).unwrap();

        assert_eq!(parsed.rows.len(), 1);
        assert!(parsed.rows[0].fields.get("Status").is_none());
    }

    #[test]
    fn test_csv_parser_rejects_wrong_extension() {
        let mut temp_file = Builder::new().suffix(".txt").tempfile().unwrap();
        temp_file.write_all(b"Company\nAcme\n").unwrap();

        let result = CsvParser.parse_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_universal_parser_unsupported_extension() {
        let mut temp_file = Builder::new().suffix(".pdf").tempfile().unwrap();
        temp_file.write_all(b"junk").unwrap();

        let result = UniversalFileParser.parse_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_cell_to_string_number_formatting() {
        assert_eq!(cell_to_string(&Data::Float(2024.0)), "2024");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
