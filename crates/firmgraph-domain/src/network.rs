//! Network module - decision-makers connected through shared companies

use crate::table::TableRow;
use serde::Serialize;

/// An undirected edge between two decision-makers
///
/// `person_a < person_b` always holds; `weight` is the number of companies
/// both persons sit on, and `business_ids` lists those companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionEdge {
    /// Lower decision person id of the pair
    pub person_a: String,

    /// Display name of `person_a`
    pub person_a_label: String,

    /// Higher decision person id of the pair
    pub person_b: String,

    /// Display name of `person_b`
    pub person_b_label: String,

    /// Number of shared companies
    pub weight: usize,

    /// Shared companies in first-seen order
    pub business_ids: Vec<String>,
}

impl TableRow for DecisionEdge {
    const TABLE: &'static str = "decision_maker_edges";

    const COLUMNS: &'static [&'static str] = &[
        "person_a",
        "person_a_label",
        "person_b",
        "person_b_label",
        "weight",
        "business_ids",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.person_a.clone(),
            self.person_a_label.clone(),
            self.person_b.clone(),
            self.person_b_label.clone(),
            self.weight.to_string(),
            self.business_ids.join(";"),
        ]
    }
}
