//! Run metrics for a pipeline run

use crate::assembler::CompanyExtraction;

/// Counters collected during one pipeline run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunMetrics {
    /// Input files discovered
    pub files_seen: usize,

    /// Files extracted into the tables
    pub files_processed: usize,

    /// Files left out after a failure
    pub files_skipped: usize,

    /// `basic_details` rows
    pub basic_rows: usize,

    /// `financial_details` rows
    pub financial_rows: usize,

    /// `main_decision_makers` rows
    pub decision_rows: usize,

    /// `all_decision_makers` rows
    pub associated_rows: usize,

    /// `decision_maker_edges` rows (0 when not emitted)
    pub edge_rows: usize,

    /// Wall-clock time of the run in milliseconds
    pub elapsed_ms: u64,
}

impl RunMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discovered input file
    pub fn record_seen(&mut self) {
        self.files_seen += 1;
    }

    /// Record the rows of one successfully extracted file
    pub fn record_extraction(&mut self, extraction: &CompanyExtraction) {
        self.files_processed += 1;
        self.basic_rows += 1;
        self.financial_rows += extraction.financials.len();
        self.decision_rows += extraction.decision_makers.len();
        self.associated_rows += extraction.associated_decision_makers.len();
    }

    /// Record a skipped file
    pub fn record_skip(&mut self) {
        self.files_skipped += 1;
    }

    /// Total rows across all tables
    pub fn total_rows(&self) -> usize {
        self.basic_rows
            + self.financial_rows
            + self.decision_rows
            + self.associated_rows
            + self.edge_rows
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Extraction Summary".to_string(),
            "==================".to_string(),
            format!(
                "Files: {} seen, {} processed, {} skipped",
                self.files_seen, self.files_processed, self.files_skipped
            ),
            format!("basic_details: {}", self.basic_rows),
            format!("financial_details: {}", self.financial_rows),
            format!("main_decision_makers: {}", self.decision_rows),
            format!("all_decision_makers: {}", self.associated_rows),
        ];
        if self.edge_rows > 0 {
            lines.push(format!("decision_maker_edges: {}", self.edge_rows));
        }
        lines.push(format!("Elapsed: {} ms", self.elapsed_ms));
        lines.join("\n")
    }
}
