//! Person module - decision-maker rows

use crate::table::{number_cell, text_cell, TableRow};
use serde::Serialize;

/// A decision-maker listed directly on a company
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DecisionPersonRecord {
    /// Business identifier (join key)
    pub business_id: String,
    /// Registry identifier of the person
    pub decision_person_id: Option<String>,
    /// Office identifier
    pub office_id: Option<String>,
    /// Position code
    pub position_id: Option<String>,
    /// Position title as text
    pub position_text: Option<String>,
    /// Given name(s)
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Gender code as given by the source
    pub gender: Option<String>,
    /// Status code of the position
    pub status_id: Option<String>,
    /// Trade-register cross reference
    pub prh_id: Option<String>,
    /// Secondary registry cross reference
    pub mbs_id: Option<String>,
    /// Responsibility codes joined with `;`
    pub responsibilities: Option<String>,
    /// Responsibility labels joined with `;`
    pub responsibilities_text: Option<String>,
}

impl TableRow for DecisionPersonRecord {
    const TABLE: &'static str = "main_decision_makers";

    const COLUMNS: &'static [&'static str] = &[
        "business_id",
        "decision_person_id",
        "office_id",
        "position_id",
        "position_text",
        "first_name",
        "last_name",
        "gender",
        "status_id",
        "prh_id",
        "mbs_id",
        "responsibilities",
        "responsibilities_text",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.business_id.clone(),
            text_cell(&self.decision_person_id),
            text_cell(&self.office_id),
            text_cell(&self.position_id),
            text_cell(&self.position_text),
            text_cell(&self.first_name),
            text_cell(&self.last_name),
            text_cell(&self.gender),
            text_cell(&self.status_id),
            text_cell(&self.prh_id),
            text_cell(&self.mbs_id),
            text_cell(&self.responsibilities),
            text_cell(&self.responsibilities_text),
        ]
    }
}

/// A decision-maker reached through an associated person group
///
/// Every person of every group becomes one row tagged with the company
/// whose record listed the group.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AssociatedDecisionPersonRecord {
    /// Business identifier of the owning company (join key)
    pub business_id: String,
    /// Registry identifier of the person
    pub finder_decision_person_id: Option<String>,
    /// Given name(s)
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Display name as given by the group listing
    pub full_name: Option<String>,
    /// Position title as text
    pub position_text: Option<String>,
    /// Position code
    pub position_id: Option<String>,
    /// Status code of the position
    pub status_id: Option<String>,
    /// Office identifier
    pub office_id: Option<String>,
    /// Registration date of the position
    pub person_reg_date: Option<String>,
    /// Trade-register cross reference
    pub prh_id: Option<String>,
    /// Turnover of the associated company, if numeric
    pub company_turnover: Option<f64>,
    /// Operating margin of the associated company, if numeric
    pub company_operating_margin: Option<f64>,
}

impl TableRow for AssociatedDecisionPersonRecord {
    const TABLE: &'static str = "all_decision_makers";

    const COLUMNS: &'static [&'static str] = &[
        "business_id",
        "finder_decision_person_id",
        "first_name",
        "last_name",
        "full_name",
        "position_text",
        "position_id",
        "status_id",
        "office_id",
        "person_reg_date",
        "prh_id",
        "company_turnover",
        "company_operating_margin",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.business_id.clone(),
            text_cell(&self.finder_decision_person_id),
            text_cell(&self.first_name),
            text_cell(&self.last_name),
            text_cell(&self.full_name),
            text_cell(&self.position_text),
            text_cell(&self.position_id),
            text_cell(&self.status_id),
            text_cell(&self.office_id),
            text_cell(&self.person_reg_date),
            text_cell(&self.prh_id),
            number_cell(self.company_turnover),
            number_cell(self.company_operating_margin),
        ]
    }
}
