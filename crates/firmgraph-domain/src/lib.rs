//! Firmgraph Domain Layer
//!
//! Value rows produced by the extraction pipeline and the loose record type
//! they are extracted from. Every row is immutable once built and carries the
//! business identifier used to join the output tables.
//!
//! ## Key Concepts
//!
//! - **RawCompanyRecord**: the decoded, schema-loose business-data object for one company
//! - **BasicCompanyDetails**: one profile row per company
//! - **FinancialYearRecord**: one row per (company, fiscal year)
//! - **DecisionPersonRecord**: a decision-maker listed directly on the company
//! - **AssociatedDecisionPersonRecord**: a decision-maker reached through an associated group
//! - **DecisionEdge**: two decision-makers sharing at least one company
//!
//! ## Tabular output
//!
//! All rows implement [`TableRow`], which fixes the column order and the
//! rendering of each cell for delimited output.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod company;
pub mod financial;
pub mod network;
pub mod person;
pub mod record;
pub mod table;

// Re-exports for convenience
pub use company::{BasicCompanyDetails, Coordinates};
pub use financial::FinancialYearRecord;
pub use network::DecisionEdge;
pub use person::{AssociatedDecisionPersonRecord, DecisionPersonRecord};
pub use record::RawCompanyRecord;
pub use table::TableRow;
