//! CLI for awscmd.
//!
//! One subcommand per service; the operation name and its `Name=value`
//! parameters follow. Selection, pagination control, and confirmation
//! bypass are flags.

pub mod exec;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// awscmd - invoke paginated AWS service operations
///
/// Builds a request from Name=value parameters, auto-iterates continuation
/// tokens, and projects responses through a selectable output shape.
#[derive(Parser, Debug, Clone)]
#[command(name = "awscmd")]
#[command(version)]
#[command(about = "Invoke paginated AWS service operations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Endpoint URL override
    #[arg(long, global = true, env = "AWSCMD_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Region used to derive default endpoints
    #[arg(long, global = true, env = "AWSCMD_REGION")]
    pub region: Option<String>,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true, env = "AWSCMD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip the confirmation prompt for mutating operations
    #[arg(long, global = true)]
    pub force: bool,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// One JSON document per line
    Json,
    /// YAML documents
    Yaml,
}

impl From<OutputFormat> for awscmd::output::Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => Self::Human,
            OutputFormat::Json => Self::Json,
            OutputFormat::Yaml => Self::Yaml,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Invoke an Elastic Transcoder operation
    Transcoder(OperationArgs),

    /// Invoke a Cloud Map (Service Discovery) operation
    Cloudmap(OperationArgs),

    /// Invoke a Kinesis Video WebRTC Storage operation
    Kvwebrtc(OperationArgs),

    /// List the operations awscmd knows about
    #[command(name = "list-ops")]
    ListOps(ListOpsArgs),
}

/// Arguments shared by every operation invocation
#[derive(Args, Debug, Clone)]
pub struct OperationArgs {
    /// Operation name (ListJobsByPipeline and list-jobs-by-pipeline both work)
    pub operation: String,

    /// Operation parameters (values are parsed as JSON when possible,
    /// strings otherwise)
    #[arg(value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Output selection: omit for the primary collection, '*' for the whole
    /// response per page, a field name, or ^ParamName to echo an input
    #[arg(long)]
    pub select: Option<String>,

    /// Fetch exactly one page instead of following continuation tokens
    #[arg(long)]
    pub no_paginate: bool,

    /// Continuation token to start from (implies a single page)
    #[arg(long)]
    pub starting_token: Option<String>,
}

/// Arguments for list-ops
#[derive(Args, Debug, Clone)]
pub struct ListOpsArgs {
    /// Only show operations of this service
    pub service: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn operation_args_parse_flags_and_pairs() {
        let cli = Cli::parse_from([
            "awscmd",
            "transcoder",
            "ListJobsByPipeline",
            "PipelineId=1234",
            "--select",
            "*",
            "--no-paginate",
        ]);
        match cli.command {
            Commands::Transcoder(args) => {
                assert_eq!(args.operation, "ListJobsByPipeline");
                assert_eq!(args.params, vec!["PipelineId=1234".to_string()]);
                assert_eq!(args.select.as_deref(), Some("*"));
                assert!(args.no_paginate);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
