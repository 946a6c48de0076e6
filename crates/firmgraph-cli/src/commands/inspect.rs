//! Inspect command implementation.

use super::build_pipeline;
use crate::cli::{InspectArgs, TableArg};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use firmgraph_extractor::CompanyExtraction;

/// Execute the inspect command.
pub fn execute_inspect(args: InspectArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let pipeline = build_pipeline(config.extractor.clone(), config, args.translations)?;
    let extraction = pipeline.extract_file(&args.file)?;
    println!("{}", render(&extraction, args.table, formatter)?);
    Ok(())
}

/// Render the selected table, or all four.
fn render(
    extraction: &CompanyExtraction,
    table: Option<TableArg>,
    formatter: &Formatter,
) -> Result<String> {
    if let Some(table) = table {
        return render_one(extraction, table, formatter);
    }

    if formatter.format() == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(extraction)?);
    }

    let mut sections = Vec::new();
    for table in [
        TableArg::Basic,
        TableArg::Financial,
        TableArg::Decision,
        TableArg::Associated,
    ] {
        sections.push(render_one(extraction, table, formatter)?);
    }
    Ok(sections.join("\n\n"))
}

fn render_one(
    extraction: &CompanyExtraction,
    table: TableArg,
    formatter: &Formatter,
) -> Result<String> {
    match table {
        TableArg::Basic => formatter.format_rows(std::slice::from_ref(&extraction.basic)),
        TableArg::Financial => formatter.format_rows(&extraction.financials),
        TableArg::Decision => formatter.format_rows(&extraction.decision_makers),
        TableArg::Associated => formatter.format_rows(&extraction.associated_decision_makers),
    }
}
