//! Firmgraph Extractor
//!
//! Converts scraped per-company registry documents into flat, joinable tables.
//!
//! # Overview
//!
//! Each input file holds one company's page document. The business-data object
//! nested inside it is fanned out to four independent extractors, and the rows
//! of all files are collected into four tables keyed by business identifier.
//!
//! # Architecture
//!
//! ```text
//! JSON file → Loader → RawCompanyRecord ─┬→ basic details      ─┐
//!                                        ├→ financial series   ─┤
//!                                        ├→ decision persons   ─┼→ CompanyTables → CSV
//!                                        └→ associated persons ─┘
//! ```
//!
//! # Key Features
//!
//! - **Category translation**: raw labels resolve through an injected table; a
//!   present but unmapped label is an error, never a silent `None`
//! - **Positional alignment**: parallel metric arrays become one row per fiscal year
//! - **Split numeric policy**: curated financial figures fail loudly, associated
//!   person figures are nulled
//! - **Failure policy**: abort on the first bad file, or skip and report it
//!
//! # Example Usage
//!
//! ```no_run
//! use firmgraph_extractor::{ExtractorConfig, Pipeline};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::default().with_translations("data/translations.yml");
//! let pipeline = Pipeline::from_config(config)?;
//!
//! let report = pipeline.run_to_dir("data/scraped_raw_jsons", "data/company_info")?;
//!
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assembler;
mod associated;
mod basic;
mod config;
mod decision;
mod error;
mod fields;
mod financial;
mod loader;
mod metrics;
mod network;
mod pipeline;
mod translation;


pub use assembler::{write_table, CompanyExtraction, CompanyTables, WrittenTable};
pub use associated::extract_associated_persons;
pub use basic::{extract_basic_details, resolve_category};
pub use config::{ExtractorConfig, FailurePolicy};
pub use decision::extract_decision_persons;
pub use error::ExtractorError;
pub use fields::NumericErrorPolicy;
pub use financial::{clean_year, extract_financials, Metric};
pub use loader::{discover_inputs, load_record, load_record_file, resolve_business_id};
pub use metrics::RunMetrics;
pub use network::{build_decision_edges, EdgeFilter};
pub use pipeline::{Pipeline, RunReport, SkippedFile, UnmappedLabel, ValidationReport};
pub use translation::{Taxonomy, TranslationTable};
