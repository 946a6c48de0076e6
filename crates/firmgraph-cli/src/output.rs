//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use firmgraph_domain::TableRow;
use firmgraph_extractor::{RunReport, ValidationReport};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format extracted rows of one table.
    pub fn format_rows<R: TableRow + Serialize>(&self, rows: &[R]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Table => Ok(self.format_rows_table(rows)),
        }
    }

    fn format_rows_table<R: TableRow>(&self, rows: &[R]) -> String {
        if rows.is_empty() {
            return self.colorize(&format!("No {} rows.", R::TABLE), "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(R::COLUMNS.iter().copied());
        for row in rows {
            builder.push_record(row.cells());
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format the outcome of an extraction run.
    pub fn format_report(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
        }
    }

    fn format_report_json(&self, report: &RunReport) -> Result<String> {
        let metrics = &report.metrics;
        let value = serde_json::json!({
            "files": {
                "seen": metrics.files_seen,
                "processed": metrics.files_processed,
                "skipped": metrics.files_skipped,
            },
            "tables": report.written.iter().map(|t| serde_json::json!({
                "name": t.name,
                "path": t.path.display().to_string(),
                "rows": t.rows,
            })).collect::<Vec<_>>(),
            "skipped": report.skipped.iter().map(|s| serde_json::json!({
                "file": s.file,
                "reason": s.reason,
            })).collect::<Vec<_>>(),
            "elapsed_ms": metrics.elapsed_ms,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_report_table(&self, report: &RunReport) -> String {
        let metrics = &report.metrics;
        let mut lines = Vec::new();

        if !report.written.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Table", "Rows", "Path"]);
            for table in &report.written {
                builder.push_record([
                    table.name.to_string(),
                    table.rows.to_string(),
                    table.path.display().to_string(),
                ]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            lines.push(table.to_string());
        }

        for skipped in &report.skipped {
            lines.push(self.warning(&format!("Skipped {}: {}", skipped.file, skipped.reason)));
        }

        lines.push(self.success(&format!(
            "Processed {} of {} file(s) in {} ms",
            metrics.files_processed, metrics.files_seen, metrics.elapsed_ms
        )));
        lines.join("\n")
    }

    /// Format the outcome of a validation pass.
    pub fn format_validation(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "files_checked": report.files_checked,
                    "unmapped": report.unmapped.iter().map(|u| serde_json::json!({
                        "taxonomy": u.taxonomy.to_string(),
                        "label": u.label,
                        "files": u.files,
                    })).collect::<Vec<_>>(),
                    "invalid": report.invalid.iter().map(|s| serde_json::json!({
                        "file": s.file,
                        "reason": s.reason,
                    })).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(self.format_validation_table(report)),
        }
    }

    fn format_validation_table(&self, report: &ValidationReport) -> String {
        if report.is_clean() {
            return self.success(&format!("{} file(s) valid", report.files_checked));
        }

        let mut lines = Vec::new();
        if !report.unmapped.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Taxonomy", "Label", "Files"]);
            for unmapped in &report.unmapped {
                builder.push_record([
                    unmapped.taxonomy.to_string(),
                    unmapped.label.clone(),
                    unmapped.files.len().to_string(),
                ]);
            }
            let mut table = builder.build();
            table.with(Style::rounded());
            lines.push(self.error(&format!("{} unmapped label(s):", report.unmapped.len())));
            lines.push(table.to_string());
        }
        for invalid in &report.invalid {
            lines.push(self.error(&format!("{}: {}", invalid.file, invalid.reason)));
        }
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmgraph_domain::FinancialYearRecord;
    use firmgraph_extractor::{CompanyTables, RunMetrics, SkippedFile};

    fn rows() -> Vec<FinancialYearRecord> {
        vec![FinancialYearRecord {
            business_id: "1234567-8".to_string(),
            year: "2022".to_string(),
            turnover: Some(100000.0),
            ..Default::default()
        }]
    }

    fn report() -> RunReport {
        RunReport {
            tables: CompanyTables::new(),
            skipped: vec![SkippedFile {
                file: "bad.json".to_string(),
                reason: "Malformed input".to_string(),
            }],
            metrics: RunMetrics {
                files_seen: 2,
                files_processed: 1,
                files_skipped: 1,
                ..Default::default()
            },
            written: Vec::new(),
        }
    }

    #[test]
    fn test_rows_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_rows(&rows()).unwrap();
        assert!(output.contains("\"turnover\": 100000.0"));
        assert!(output.contains("\"net_income\": null"));
    }

    #[test]
    fn test_rows_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_rows(&rows()).unwrap();
        assert!(output.contains("business_id"));
        assert!(output.contains("100000"));
    }

    #[test]
    fn test_empty_rows() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_rows::<FinancialYearRecord>(&[]).unwrap();
        assert_eq!(output, "No financial_details rows.");
    }

    #[test]
    fn test_report_table_lists_skipped() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("⚠ Skipped bad.json: Malformed input"));
        assert!(output.contains("Processed 1 of 2 file(s)"));
    }

    #[test]
    fn test_report_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["files"]["skipped"], 1);
        assert_eq!(value["skipped"][0]["file"], "bad.json");
    }

    #[test]
    fn test_clean_validation() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = ValidationReport {
            files_checked: 3,
            ..Default::default()
        };
        assert_eq!(formatter.format_validation(&report).unwrap(), "✓ 3 file(s) valid");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.info("test"), "ℹ test");
    }
}
