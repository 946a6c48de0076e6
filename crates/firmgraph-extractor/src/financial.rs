//! Financial series extraction
//!
//! The source stores a company's history as parallel arrays: one array of
//! fiscal years and one array per metric. Index `i` of every array refers to
//! the same fiscal year, with the years array defining the index space. A
//! metric array shorter than the years array simply has no value for the
//! trailing years.

use crate::error::ExtractorError;
use crate::fields::{coerce_numeric, is_truthy, value_to_text, NumericErrorPolicy};
use firmgraph_domain::{FinancialYearRecord, RawCompanyRecord};
use serde_json::Value;

/// Key of the fiscal years array in the company record
pub const FISCAL_YEARS_KEY: &str = "financialFiscalYears";

/// Scale of turnover, operating profit and net income in the source
const THOUSANDS: f64 = 1000.0;

/// The thirteen tracked metrics
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Turnover,
    TurnoverChangePct,
    OperatingProfit,
    OperatingMarginPct,
    SolvencyRatio,
    BalanceSheetTotal,
    NumEmployees,
    EbitdaMarginPct,
    RoiPct,
    EquityTotal,
    NetIncome,
    QuickRatio,
    CurrentRatio,
}

impl Metric {
    /// All metrics in output column order
    pub const ALL: [Metric; 13] = [
        Metric::Turnover,
        Metric::TurnoverChangePct,
        Metric::OperatingProfit,
        Metric::OperatingMarginPct,
        Metric::SolvencyRatio,
        Metric::BalanceSheetTotal,
        Metric::NumEmployees,
        Metric::EbitdaMarginPct,
        Metric::RoiPct,
        Metric::EquityTotal,
        Metric::NetIncome,
        Metric::QuickRatio,
        Metric::CurrentRatio,
    ];

    /// Output column name
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Turnover => "turnover",
            Metric::TurnoverChangePct => "turnover_change_pct",
            Metric::OperatingProfit => "operating_profit",
            Metric::OperatingMarginPct => "operating_margin_pct",
            Metric::SolvencyRatio => "solvency_ratio",
            Metric::BalanceSheetTotal => "balance_sheet_total",
            Metric::NumEmployees => "num_employees",
            Metric::EbitdaMarginPct => "ebitda_margin_pct",
            Metric::RoiPct => "roi_pct",
            Metric::EquityTotal => "equity_total",
            Metric::NetIncome => "net_income",
            Metric::QuickRatio => "quick_ratio",
            Metric::CurrentRatio => "current_ratio",
        }
    }

    /// Key of the metric's array in the company record
    pub fn source_key(&self) -> &'static str {
        match self {
            Metric::Turnover => "financialTurnovers",
            Metric::TurnoverChangePct => "financialTurnoverPercentageChanges",
            Metric::OperatingProfit => "financialOperatingProfits",
            Metric::OperatingMarginPct => "financialOperatingMargins",
            Metric::SolvencyRatio => "financialSolvencies",
            Metric::BalanceSheetTotal => "financialBalances",
            Metric::NumEmployees => "financialNumberOfEmployees",
            Metric::EbitdaMarginPct => "financialEBITDAs",
            Metric::RoiPct => "financialROIs",
            Metric::EquityTotal => "financialEquities",
            Metric::NetIncome => "financialNetIncomes",
            Metric::QuickRatio => "financialQuickRatios",
            Metric::CurrentRatio => "financialCurrentRatios",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Keep at most the first four characters of a year value
///
/// Guards against date-like or float-like years (`"2021.0"`, `"2021-12-31"`).
/// A `null` year is empty.
pub fn clean_year(value: &Value) -> String {
    let text = value_to_text(value).unwrap_or_default();
    text.chars().take(4).collect()
}

/// Raw cells of one fiscal year, one per metric
struct YearCells<'a> {
    business_id: &'a str,
    year: String,
    cells: [Option<&'a Value>; 13],
}

impl<'a> YearCells<'a> {
    fn cell(&self, metric: Metric) -> Option<&'a Value> {
        self.cells[metric.index()]
    }

    /// Metric as reported
    fn number(&self, metric: Metric) -> Result<Option<f64>, ExtractorError> {
        coerce_numeric(self.cell(metric), NumericErrorPolicy::Fail).map_err(|value| {
            ExtractorError::DataFormat {
                business_id: self.business_id.to_string(),
                metric: metric.column(),
                year: self.year.clone(),
                value,
            }
        })
    }

    /// Metric rescaled from thousands, only when `gate` is truthy
    fn scaled(&self, metric: Metric, gate: Metric) -> Result<Option<f64>, ExtractorError> {
        if !is_truthy(self.cell(gate)) {
            return Ok(None);
        }
        Ok(self.number(metric)?.map(|v| v * THOUSANDS))
    }

    fn into_record(self) -> Result<FinancialYearRecord, ExtractorError> {
        // net income is gated on the balance sheet total, as the source tooling does
        Ok(FinancialYearRecord {
            business_id: self.business_id.to_string(),
            turnover: self.scaled(Metric::Turnover, Metric::Turnover)?,
            turnover_change_pct: self.number(Metric::TurnoverChangePct)?,
            operating_profit: self.scaled(Metric::OperatingProfit, Metric::OperatingProfit)?,
            operating_margin_pct: self.number(Metric::OperatingMarginPct)?,
            solvency_ratio: self.number(Metric::SolvencyRatio)?,
            balance_sheet_total: self.number(Metric::BalanceSheetTotal)?,
            num_employees: self.number(Metric::NumEmployees)?,
            ebitda_margin_pct: self.number(Metric::EbitdaMarginPct)?,
            roi_pct: self.number(Metric::RoiPct)?,
            equity_total: self.number(Metric::EquityTotal)?,
            net_income: self.scaled(Metric::NetIncome, Metric::BalanceSheetTotal)?,
            quick_ratio: self.number(Metric::QuickRatio)?,
            current_ratio: self.number(Metric::CurrentRatio)?,
            year: self.year,
        })
    }
}

/// Value at `idx`, or `None` when the array is too short or the value is `""`
fn aligned_cell(series: &[Value], idx: usize) -> Option<&Value> {
    match series.get(idx) {
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Turn the parallel metric arrays into one row per fiscal year
///
/// Rows follow the order of the years array, which is not necessarily
/// chronological. A missing years array yields no rows.
pub fn extract_financials(
    record: &RawCompanyRecord,
    business_id: &str,
) -> Result<Vec<FinancialYearRecord>, ExtractorError> {
    let Some(years) = record.get_array(FISCAL_YEARS_KEY) else {
        return Ok(Vec::new());
    };

    let series: Vec<&[Value]> = Metric::ALL
        .iter()
        .map(|m| record.get_array(m.source_key()).unwrap_or(&[]))
        .collect();

    years
        .iter()
        .enumerate()
        .map(|(idx, year_value)| {
            let cells = std::array::from_fn(|m| aligned_cell(series[m], idx));
            YearCells {
                business_id,
                year: clean_year(year_value),
                cells,
            }
            .into_record()
        })
        .collect()
}
