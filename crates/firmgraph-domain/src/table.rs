//! Table module - column layout and cell rendering for delimited output

/// A row that can be written to a delimited table
///
/// Column order is the field declaration order of the implementing struct.
pub trait TableRow {
    /// File stem of the table this row belongs to (e.g. `financial_details`)
    const TABLE: &'static str;

    /// Column names in declaration order
    const COLUMNS: &'static [&'static str];

    /// Render each cell; the result has exactly `COLUMNS.len()` entries
    fn cells(&self) -> Vec<String>;
}

/// Render an optional text cell; `None` becomes an empty cell
pub fn text_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Render an optional numeric cell; `None` becomes an empty cell
///
/// Uses the shortest representation that round-trips (`150000`, `0.25`).
pub fn number_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_cell() {
        assert_eq!(text_cell(&Some("Oy".to_string())), "Oy");
        assert_eq!(text_cell(&None), "");
    }

    #[test]
    fn test_number_cell() {
        assert_eq!(number_cell(Some(150000.0)), "150000");
        assert_eq!(number_cell(Some(-12.5)), "-12.5");
        assert_eq!(number_cell(None), "");
    }

    proptest::proptest! {
        #[test]
        fn prop_number_cell_parses_back(x in proptest::num::f64::NORMAL) {
            let rendered = number_cell(Some(x));
            proptest::prop_assert_eq!(rendered.parse::<f64>().unwrap(), x);
        }
    }
}
