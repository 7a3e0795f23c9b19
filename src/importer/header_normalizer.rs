// ==========================================
// 求职申请跟踪系统 - 表头归一化实现
// ==========================================
// 职责: 人工书写的列名 → 规范字段键
// 别名表为兼容性契约,CSV 与 Excel 输入共用同一实现
// ==========================================

use crate::domain::import::RawRow;
use crate::importer::job_importer_trait::HeaderNormalizer as HeaderNormalizerTrait;

pub struct JobHeaderNormalizer;

impl HeaderNormalizerTrait for JobHeaderNormalizer {
    fn normalize_header(&self, header: &str) -> String {
        let normalized = header.trim().to_lowercase();

        // 固定别名表（与历史导入文件保持兼容,勿改动）
        let canonical = match normalized.as_str() {
            "company name" | "company_name" => "company",
            "job title" | "job_title" | "title" => "position",
            "application date" | "application_date" | "date applied" | "date_applied"
            | "applied_date" => "applicationDate",
            "job status" | "job_status" | "application status" | "application_status" => "status",
            "job link" | "job_link" | "url" | "link" => "jobLink",
            "follow up" | "follow_up" | "followup" | "follow up date" | "follow_up_date" => {
                "followUpDate"
            }
            // 未命中的表头原样透传（已小写/去空白）,notes 等字段由此自然映射
            _ => return normalized,
        };

        canonical.to_string()
    }

    fn normalize_row(&self, row: RawRow) -> RawRow {
        let fields = row
            .fields
            .into_iter()
            .map(|(key, value)| (self.normalize_header(&key), value))
            .collect();

        RawRow {
            row_number: row.row_number,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_normalize_case_and_whitespace_insensitive() {
        let normalizer = JobHeaderNormalizer;
        assert_eq!(normalizer.normalize_header("Company Name"), "company");
        assert_eq!(normalizer.normalize_header("company_name"), "company");
        assert_eq!(normalizer.normalize_header(" COMPANY NAME "), "company");
    }

    #[test]
    fn test_normalize_alias_table() {
        let normalizer = JobHeaderNormalizer;
        assert_eq!(normalizer.normalize_header("Job Title"), "position");
        assert_eq!(normalizer.normalize_header("title"), "position");
        assert_eq!(normalizer.normalize_header("Date Applied"), "applicationDate");
        assert_eq!(normalizer.normalize_header("applied_date"), "applicationDate");
        assert_eq!(normalizer.normalize_header("Application Status"), "status");
        assert_eq!(normalizer.normalize_header("URL"), "jobLink");
        assert_eq!(normalizer.normalize_header("Follow Up Date"), "followUpDate");
        assert_eq!(normalizer.normalize_header("followup"), "followUpDate");
    }

    #[test]
    fn test_unknown_header_passes_through_lowercased() {
        let normalizer = JobHeaderNormalizer;
        assert_eq!(normalizer.normalize_header("Notes"), "notes");
        assert_eq!(normalizer.normalize_header(" Recruiter "), "recruiter");
    }

    #[test]
    fn test_already_canonical_headers_pass_through() {
        let normalizer = JobHeaderNormalizer;
        assert_eq!(normalizer.normalize_header("Company"), "company");
        assert_eq!(normalizer.normalize_header("Status"), "status");
        assert_eq!(normalizer.normalize_header("Position"), "position");
    }

    #[test]
    fn test_normalize_row_keeps_values_and_number() {
        let normalizer = JobHeaderNormalizer;
        let mut fields = HashMap::new();
        fields.insert("Company Name".to_string(), "Acme".to_string());
        fields.insert("Job Title".to_string(), "Engineer".to_string());

        let row = normalizer.normalize_row(RawRow {
            row_number: 4,
            fields,
        });

        assert_eq!(row.row_number, 4);
        assert_eq!(row.fields.get("company"), Some(&"Acme".to_string()));
        assert_eq!(row.fields.get("position"), Some(&"Engineer".to_string()));
    }
}
