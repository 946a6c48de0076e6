//! Financial module - one row per company and fiscal year

use crate::table::{number_cell, TableRow};
use serde::Serialize;

/// Financial figures for one company in one fiscal year
///
/// Turnover, operating profit and net income are absolute currency units;
/// everything else is carried as reported.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FinancialYearRecord {
    /// Business identifier (join key)
    pub business_id: String,

    /// Fiscal year, at most four characters
    pub year: String,

    /// Turnover
    pub turnover: Option<f64>,

    /// Turnover change versus the previous year (%)
    pub turnover_change_pct: Option<f64>,

    /// Operating profit
    pub operating_profit: Option<f64>,

    /// Operating margin (%)
    pub operating_margin_pct: Option<f64>,

    /// Solvency ratio
    pub solvency_ratio: Option<f64>,

    /// Balance sheet total
    pub balance_sheet_total: Option<f64>,

    /// Number of employees
    pub num_employees: Option<f64>,

    /// EBITDA margin (%)
    pub ebitda_margin_pct: Option<f64>,

    /// Return on investment (%)
    pub roi_pct: Option<f64>,

    /// Total equity
    pub equity_total: Option<f64>,

    /// Net income
    pub net_income: Option<f64>,

    /// Quick ratio
    pub quick_ratio: Option<f64>,

    /// Current ratio
    pub current_ratio: Option<f64>,
}

impl TableRow for FinancialYearRecord {
    const TABLE: &'static str = "financial_details";

    const COLUMNS: &'static [&'static str] = &[
        "business_id",
        "year",
        "turnover",
        "turnover_change_pct",
        "operating_profit",
        "operating_margin_pct",
        "solvency_ratio",
        "balance_sheet_total",
        "num_employees",
        "ebitda_margin_pct",
        "roi_pct",
        "equity_total",
        "net_income",
        "quick_ratio",
        "current_ratio",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.business_id.clone(),
            self.year.clone(),
            number_cell(self.turnover),
            number_cell(self.turnover_change_pct),
            number_cell(self.operating_profit),
            number_cell(self.operating_margin_pct),
            number_cell(self.solvency_ratio),
            number_cell(self.balance_sheet_total),
            number_cell(self.num_employees),
            number_cell(self.ebitda_margin_pct),
            number_cell(self.roi_pct),
            number_cell(self.equity_total),
            number_cell(self.net_income),
            number_cell(self.quick_ratio),
            number_cell(self.current_ratio),
        ]
    }
}
