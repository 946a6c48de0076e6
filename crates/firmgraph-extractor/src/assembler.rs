//! Table assembly and delimited output

use crate::error::ExtractorError;
use firmgraph_domain::{
    AssociatedDecisionPersonRecord, BasicCompanyDetails, DecisionEdge, DecisionPersonRecord,
    FinancialYearRecord, TableRow,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything extracted from one input file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyExtraction {
    /// Profile row
    pub basic: BasicCompanyDetails,

    /// One row per fiscal year
    pub financials: Vec<FinancialYearRecord>,

    /// Directly listed decision-makers
    pub decision_makers: Vec<DecisionPersonRecord>,

    /// Decision-makers reached through associated groups
    pub associated_decision_makers: Vec<AssociatedDecisionPersonRecord>,
}

impl CompanyExtraction {
    /// Business identifier of the company
    pub fn business_id(&self) -> &str {
        &self.basic.business_id
    }

    /// Total number of rows across all tables
    pub fn row_count(&self) -> usize {
        1 + self.financials.len()
            + self.decision_makers.len()
            + self.associated_decision_makers.len()
    }
}

/// A table file that was written
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenTable {
    /// Table name (file stem)
    pub name: &'static str,

    /// Full path of the file
    pub path: PathBuf,

    /// Number of data rows (header excluded)
    pub rows: usize,
}

/// Append-only row collections for the whole run
///
/// Rows keep input-file order; nothing is re-sorted.
#[derive(Debug, Clone, Default)]
pub struct CompanyTables {
    /// `basic_details` rows
    pub basic_details: Vec<BasicCompanyDetails>,

    /// `financial_details` rows
    pub financial_details: Vec<FinancialYearRecord>,

    /// `main_decision_makers` rows
    pub decision_makers: Vec<DecisionPersonRecord>,

    /// `all_decision_makers` rows
    pub associated_decision_makers: Vec<AssociatedDecisionPersonRecord>,

    /// `decision_maker_edges` rows, only when requested
    pub decision_edges: Option<Vec<DecisionEdge>>,
}

impl CompanyTables {
    /// Create empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the rows of one company
    pub fn extend(&mut self, extraction: CompanyExtraction) {
        self.basic_details.push(extraction.basic);
        self.financial_details.extend(extraction.financials);
        self.decision_makers.extend(extraction.decision_makers);
        self.associated_decision_makers
            .extend(extraction.associated_decision_makers);
    }

    /// Number of companies collected
    pub fn companies(&self) -> usize {
        self.basic_details.len()
    }

    /// Write every table into `output_dir`, creating it if needed
    ///
    /// Empty tables are still written with their header row.
    pub fn write_all(
        &self,
        output_dir: &Path,
        delimiter: u8,
    ) -> Result<Vec<WrittenTable>, ExtractorError> {
        std::fs::create_dir_all(output_dir).map_err(|e| ExtractorError::io(output_dir, e))?;

        let mut written = vec![
            write_table(output_dir, &self.basic_details, delimiter)?,
            write_table(output_dir, &self.financial_details, delimiter)?,
            write_table(output_dir, &self.decision_makers, delimiter)?,
            write_table(output_dir, &self.associated_decision_makers, delimiter)?,
        ];
        if let Some(edges) = &self.decision_edges {
            written.push(write_table(output_dir, edges, delimiter)?);
        }
        Ok(written)
    }
}

/// Write one table as `<output_dir>/<R::TABLE>.csv`
pub fn write_table<R: TableRow>(
    output_dir: &Path,
    rows: &[R],
    delimiter: u8,
) -> Result<WrittenTable, ExtractorError> {
    let path = output_dir.join(format!("{}.csv", R::TABLE));
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(&path)?;

    writer.write_record(R::COLUMNS)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }
    writer.flush().map_err(|e| ExtractorError::io(&path, e))?;

    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(WrittenTable {
        name: R::TABLE,
        path,
        rows: rows.len(),
    })
}
