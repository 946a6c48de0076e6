//! Batch pipeline: input directory to output tables

use crate::assembler::{CompanyExtraction, CompanyTables, WrittenTable};
use crate::associated::extract_associated_persons;
use crate::basic::{extract_basic_details, raw_label};
use crate::config::{ExtractorConfig, FailurePolicy};
use crate::decision::extract_decision_persons;
use crate::error::ExtractorError;
use crate::financial::extract_financials;
use crate::loader::{discover_inputs, file_stem, load_record, load_record_file, resolve_business_id};
use crate::metrics::RunMetrics;
use crate::network::build_decision_edges;
use crate::translation::{Taxonomy, TranslationTable};
use firmgraph_domain::RawCompanyRecord;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// An input file left out of the run
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    /// File name
    pub file: String,

    /// Why it was skipped
    pub reason: String,
}

/// Outcome of a pipeline run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Collected rows
    pub tables: CompanyTables,

    /// Files left out under the skip policy
    pub skipped: Vec<SkippedFile>,

    /// Run counters
    pub metrics: RunMetrics,

    /// Files written (empty until the tables are written)
    pub written: Vec<WrittenTable>,
}

impl RunReport {
    /// Human-readable summary of the run
    pub fn summary(&self) -> String {
        let mut summary = self.metrics.summary();
        for skipped in &self.skipped {
            summary.push_str(&format!("\nSkipped {}: {}", skipped.file, skipped.reason));
        }
        summary
    }
}

/// A raw label with no translation entry
#[derive(Debug, Clone, PartialEq)]
pub struct UnmappedLabel {
    /// Taxonomy the label belongs to
    pub taxonomy: Taxonomy,

    /// The raw label
    pub label: String,

    /// Files in which it occurs
    pub files: Vec<String>,
}

/// Outcome of a dry validation pass
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Files inspected
    pub files_checked: usize,

    /// Labels that would fail translation
    pub unmapped: Vec<UnmappedLabel>,

    /// Files that fail for reasons other than translation
    pub invalid: Vec<SkippedFile>,
}

impl ValidationReport {
    /// True if a strict run would succeed
    pub fn is_clean(&self) -> bool {
        self.unmapped.is_empty() && self.invalid.is_empty()
    }
}

/// The extraction pipeline
///
/// Holds the translation table for the whole run; it is never re-read per record.
pub struct Pipeline {
    config: ExtractorConfig,
    translations: Arc<TranslationTable>,
}

impl Pipeline {
    /// Create a pipeline with an already-loaded translation table
    pub fn new(
        config: ExtractorConfig,
        translations: Arc<TranslationTable>,
    ) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            config,
            translations,
        })
    }

    /// Create a pipeline, loading the table from `config.translations_path`
    pub fn from_config(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        let path = config.translations_path.clone().ok_or_else(|| {
            ExtractorError::Config("translations_path is not set".to_string())
        })?;
        let translations = TranslationTable::from_file(&path)?;
        let (categories, sub_categories) = translations.len();
        info!(
            "Loaded {} category and {} sub-category translations from {}",
            categories,
            sub_categories,
            path.display()
        );
        Self::new(config, Arc::new(translations))
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The shared translation table
    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    /// Run all four extractors on one loaded record
    pub fn extract_record(
        &self,
        record: &RawCompanyRecord,
        file_stem: &str,
    ) -> Result<CompanyExtraction, ExtractorError> {
        let business_id = resolve_business_id(record, file_stem);

        Ok(CompanyExtraction {
            basic: extract_basic_details(record, file_stem, &business_id, &self.translations)?,
            financials: extract_financials(record, &business_id)?,
            decision_makers: extract_decision_persons(record, &business_id)?,
            associated_decision_makers: extract_associated_persons(record, &business_id)?,
        })
    }

    /// Extract one decoded page document
    pub fn extract_document(
        &self,
        document: &Value,
        file_stem: &str,
    ) -> Result<CompanyExtraction, ExtractorError> {
        let record = load_record(document)?;
        self.extract_record(&record, file_stem)
    }

    /// Extract one input file
    pub fn extract_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<CompanyExtraction, ExtractorError> {
        let path = path.as_ref();
        let record = load_record_file(path)?;
        self.extract_record(&record, &file_stem(path))
    }

    /// Extract every `.json` file of `input_dir` into tables
    ///
    /// Files are processed one at a time in file-name order. A failing file
    /// either aborts the run or is left out of every table, per
    /// `failure_policy`.
    pub fn run<P: AsRef<Path>>(&self, input_dir: P) -> Result<RunReport, ExtractorError> {
        let input_dir = input_dir.as_ref();
        let start = Instant::now();
        let files = discover_inputs(input_dir)?;
        info!("Extracting {} input files from {}", files.len(), input_dir.display());

        let mut tables = CompanyTables::new();
        let mut skipped = Vec::new();
        let mut metrics = RunMetrics::new();

        for path in &files {
            metrics.record_seen();
            let name = file_name(path);

            match self.extract_file(path) {
                Ok(extraction) => {
                    debug!(
                        "Extracted {} ({} rows) from {}",
                        extraction.business_id(),
                        extraction.row_count(),
                        name
                    );
                    metrics.record_extraction(&extraction);
                    tables.extend(extraction);
                }
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(e.in_file(name)),
                    FailurePolicy::Skip => {
                        warn!("Skipping {}: {}", name, e);
                        metrics.record_skip();
                        skipped.push(SkippedFile {
                            file: name,
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        if self.config.emit_network_edges {
            let edges = self
                .config
                .edge_filter
                .apply(build_decision_edges(&tables.decision_makers));
            metrics.edge_rows = edges.len();
            tables.decision_edges = Some(edges);
        }

        metrics.elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            "Processed {} of {} files ({} skipped), {} rows",
            metrics.files_processed,
            metrics.files_seen,
            metrics.files_skipped,
            metrics.total_rows()
        );

        Ok(RunReport {
            tables,
            skipped,
            metrics,
            written: Vec::new(),
        })
    }

    /// Run and write the tables into `output_dir`
    pub fn run_to_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
    ) -> Result<RunReport, ExtractorError> {
        let mut report = self.run(input_dir)?;
        let output_dir = output_dir.as_ref();
        report.written = report
            .tables
            .write_all(output_dir, self.config.delimiter_byte())?;
        info!("Wrote {} tables to {}", report.written.len(), output_dir.display());
        Ok(report)
    }

    /// Check every input file without producing tables
    ///
    /// Collects all unmapped labels (rather than stopping at the first) and
    /// any structural or numeric failure per file.
    pub fn validate<P: AsRef<Path>>(
        &self,
        input_dir: P,
    ) -> Result<ValidationReport, ExtractorError> {
        let files = discover_inputs(input_dir)?;
        let mut unmapped: BTreeMap<(Taxonomy, String), Vec<String>> = BTreeMap::new();
        let mut report = ValidationReport::default();

        for path in &files {
            report.files_checked += 1;
            let name = file_name(path);

            let record = match load_record_file(path) {
                Ok(record) => record,
                Err(e) => {
                    report.invalid.push(SkippedFile {
                        file: name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            for taxonomy in Taxonomy::ALL {
                if let Some(label) = raw_label(&record, taxonomy) {
                    if !self.translations.contains(taxonomy, &label) {
                        unmapped.entry((taxonomy, label)).or_default().push(name.clone());
                    }
                }
            }

            let business_id = resolve_business_id(&record, &file_stem(path));
            let checked = extract_financials(&record, &business_id)
                .and_then(|_| extract_decision_persons(&record, &business_id))
                .and_then(|_| extract_associated_persons(&record, &business_id));
            if let Err(e) = checked {
                report.invalid.push(SkippedFile {
                    file: name,
                    reason: e.to_string(),
                });
            }
        }

        report.unmapped = unmapped
            .into_iter()
            .map(|((taxonomy, label), files)| UnmappedLabel {
                taxonomy,
                label,
                files,
            })
            .collect();

        info!(
            "Validated {} files: {} unmapped labels, {} invalid files",
            report.files_checked,
            report.unmapped.len(),
            report.invalid.len()
        );
        Ok(report)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
