//! awscmd - invoke paginated AWS service operations from the command line.
//!
//! This is the main entry point for the awscmd CLI.

mod cli;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging based on verbosity
    init_logging(cli.verbose);

    let exit_code = match cli::exec::execute(&cli).await {
        Ok(code) => code,
        Err(err) => {
            report_error(&err);
            err.exit_code()
        }
    };

    std::process::exit(exit_code);
}

/// Initialize logging based on verbosity level
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(verbosity >= 3))
        .with(env_filter)
        .init();
}

/// Print an error with its full cause chain.
fn report_error(err: &awscmd::error::Error) {
    eprintln!("{} {}", "error:".red().bold(), err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  {} {}", "caused by:".yellow(), cause);
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!awscmd::version().is_empty());
    }
}
