//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Firmgraph CLI - Extract company tables from scraped registry pages.
#[derive(Debug, Parser)]
#[command(name = "firmgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FIRMGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract all input files into the output tables
    Extract(ExtractArgs),

    /// Check input files and translations without writing tables
    Validate(ValidateArgs),

    /// Show the rows extracted from a single file
    Inspect(InspectArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Directory of scraped JSON files
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory to write the tables into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Translation table (.yml, .toml or .json)
    #[arg(short, long)]
    pub translations: Option<PathBuf>,

    /// Abort on the first failing file instead of skipping it
    #[arg(long)]
    pub fail_fast: bool,

    /// Also write the shared decision-maker edge table
    #[arg(long)]
    pub edges: bool,

    /// Minimum number of shared companies for an edge
    #[arg(long, requires = "edges")]
    pub min_weight: Option<usize>,

    /// Field delimiter of the output tables
    #[arg(short, long)]
    pub delimiter: Option<char>,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Directory of scraped JSON files
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Translation table (.yml, .toml or .json)
    #[arg(short, long)]
    pub translations: Option<PathBuf>,
}

/// Arguments for the inspect command.
#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// Scraped JSON file
    pub file: PathBuf,

    /// Translation table (.yml, .toml or .json)
    #[arg(short, long)]
    pub translations: Option<PathBuf>,

    /// Only show one table
    #[arg(long, value_enum)]
    pub table: Option<TableArg>,
}

/// Table selection for the inspect command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TableArg {
    /// basic_details
    Basic,
    /// financial_details
    Financial,
    /// main_decision_makers
    Decision,
    /// all_decision_makers
    Associated,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from([
            "firmgraph",
            "extract",
            "--input",
            "raw",
            "-o",
            "out",
            "--fail-fast",
            "--delimiter",
            ";",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.input, Some(PathBuf::from("raw")));
                assert_eq!(args.output, Some(PathBuf::from("out")));
                assert!(args.fail_fast);
                assert!(!args.edges);
                assert_eq!(args.delimiter, Some(';'));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_inspect_command_with_table() {
        let cli = Cli::parse_from([
            "firmgraph",
            "inspect",
            "a.json",
            "--table",
            "financial",
            "-f",
            "json",
        ]);
        match cli.command {
            Command::Inspect(args) => {
                assert_eq!(args.file, PathBuf::from("a.json"));
                assert_eq!(args.table, Some(TableArg::Financial));
            }
            _ => panic!("Expected Inspect command"),
        }
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["firmgraph", "-vv", "--no-color", "validate"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Validate(_)));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["firmgraph"]).is_err());
    }
}
