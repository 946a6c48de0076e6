//! Validate command implementation.

use super::build_pipeline;
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the validate command.
///
/// Fails with [`CliError::ValidationFailed`] when any file would not survive
/// a strict run.
pub fn execute_validate(args: ValidateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let pipeline = build_pipeline(config.extractor.clone(), config, args.translations)?;
    let input = args.input.unwrap_or_else(|| config.input_dir.clone());

    let report = pipeline.validate(&input)?;
    println!("{}", formatter.format_validation(&report)?);

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed(
            report.unmapped.len() + report.invalid.len(),
        ))
    }
}
