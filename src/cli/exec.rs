//! Command execution.

use crate::cli::{Cli, Commands, ListOpsArgs, OperationArgs};
use awscmd::config::Config;
use awscmd::confirm::confirm_mutation;
use awscmd::error::{Result, ValidationError};
use awscmd::invoke::HttpServiceClient;
use awscmd::output::Emitter;
use awscmd::params::{parse_pairs, Invocation};
use awscmd::run::run_invocation;
use awscmd::services;
use colored::Colorize;
use tokio_util::sync::CancellationToken;

/// Exit code reported after a cancelled run, SIGINT convention.
const EXIT_INTERRUPTED: i32 = 130;

/// Executes the parsed command line, returning the process exit code.
pub async fn execute(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::ListOps(args) => list_ops(args),
        Commands::Transcoder(args) => invoke_operation(cli, "transcoder", args).await,
        Commands::Cloudmap(args) => invoke_operation(cli, "cloudmap", args).await,
        Commands::Kvwebrtc(args) => invoke_operation(cli, "kvwebrtc", args).await,
    }
}

async fn invoke_operation(cli: &Cli, service: &str, args: &OperationArgs) -> Result<i32> {
    let spec = services::lookup(service, &args.operation).ok_or_else(|| {
        ValidationError::UnknownOperation(format!("{}/{}", service, args.operation))
    })?;

    // All local validation happens here, before configuration or transport
    // are even touched.
    let params = parse_pairs(&args.params)?;
    let invocation = Invocation::build(
        spec,
        params,
        args.select.as_deref(),
        args.no_paginate,
        args.starting_token.clone(),
        cli.force,
    )?;

    confirm_mutation(&invocation)?;

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env();
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = Some(endpoint.clone());
    }
    if let Some(region) = &cli.region {
        config.region = Some(region.clone());
    }

    let client = HttpServiceClient::from_config(&config, spec.service)?;

    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, stopping after the current page");
            signal_token.cancel();
        }
    });

    let mut emitter = Emitter::new(cli.output.into());
    let stats = run_invocation(&client, &invocation, cancel.clone(), |value| {
        emitter.emit(&value)
    })
    .await?;
    emitter.finish();

    tracing::info!(
        operation = %spec.qualified_name(),
        pages = stats.pages,
        emitted = stats.emitted,
        "done"
    );

    if cancel.is_cancelled() {
        Ok(EXIT_INTERRUPTED)
    } else {
        Ok(0)
    }
}

fn list_ops(args: &ListOpsArgs) -> Result<i32> {
    let filter = args.service.as_deref().map(str::to_lowercase);
    let mut shown = 0;
    for spec in services::all() {
        if let Some(filter) = &filter {
            if !spec.service.contains(filter.as_str()) {
                continue;
            }
        }
        let mut traits = Vec::new();
        if spec.paginated() {
            traits.push("paginated".cyan());
        }
        if spec.mutating {
            traits.push("mutating".yellow());
        }
        let traits = traits
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<28} {:<36} {}",
            spec.service.bright_black(),
            spec.name.bright_white().bold(),
            traits
        );
        shown += 1;
    }
    if shown == 0 {
        return Err(ValidationError::UnknownOperation(format!(
            "{}/*",
            args.service.as_deref().unwrap_or("")
        ))
        .into());
    }
    Ok(0)
}
