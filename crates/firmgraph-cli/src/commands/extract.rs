//! Extract command implementation.

use super::build_pipeline;
use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use firmgraph_extractor::{ExtractorConfig, FailurePolicy};
use tracing::info;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let extractor = extractor_config(&args, config);
    let pipeline = build_pipeline(extractor, config, args.translations)?;

    let input = args.input.unwrap_or_else(|| config.input_dir.clone());
    let output = args.output.unwrap_or_else(|| config.output_dir.clone());
    info!("Extracting {} into {}", input.display(), output.display());

    let report = pipeline.run_to_dir(&input, &output)?;
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

/// Apply command-line overrides to the configured pipeline settings.
fn extractor_config(args: &ExtractArgs, config: &Config) -> ExtractorConfig {
    let mut extractor = config.extractor.clone();
    if args.fail_fast {
        extractor.failure_policy = FailurePolicy::Abort;
    }
    if args.edges {
        extractor.emit_network_edges = true;
    }
    if let Some(min_weight) = args.min_weight {
        extractor.edge_filter.min_weight = min_weight;
    }
    if let Some(delimiter) = args.delimiter {
        extractor.delimiter = delimiter;
    }
    extractor
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::cli::{Cli, Command};

    fn parse(argv: &[&str]) -> ExtractArgs {
        match Cli::parse_from(argv).command {
            Command::Extract(args) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_config_values_kept_without_flags() {
        let mut config = Config::default();
        config.extractor.emit_network_edges = true;
        config.extractor.delimiter = '\t';

        let extractor = extractor_config(&parse(&["firmgraph", "extract"]), &config);
        assert_eq!(extractor.failure_policy, FailurePolicy::Skip);
        assert!(extractor.emit_network_edges);
        assert_eq!(extractor.delimiter, '\t');
        assert_eq!(extractor.edge_filter.min_weight, 1);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::default();
        let args = parse(&[
            "firmgraph",
            "extract",
            "--fail-fast",
            "--edges",
            "--min-weight",
            "2",
            "-d",
            ";",
        ]);

        let extractor = extractor_config(&args, &config);
        assert_eq!(extractor.failure_policy, FailurePolicy::Abort);
        assert!(extractor.emit_network_edges);
        assert_eq!(extractor.edge_filter.min_weight, 2);
        assert_eq!(extractor.delimiter, ';');
    }
}
