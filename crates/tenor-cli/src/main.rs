//! Tenor CLI - bond yield and portfolio risk analytics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Yields and durations of a callable bond
//! tenor bond --price 95 --coupon 5 --call-price 100 --years-to-call 5 --years-to-maturity 10
//!
//! # Regression and performance against a benchmark
//! tenor portfolio --returns assets.csv --market spx.csv --weights 0.6,0.4
//!
//! # Value-at-Risk from closing prices
//! tenor risk --returns closes.csv --prices --weights 0.15,0.6,0.2,0.05 --var-cutoff -0.09
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod data;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = commands::load_config(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Bond(args) => commands::bond::execute(args, &config, format)?,
        Commands::Portfolio(args) => commands::portfolio::execute(args, &config, format)?,
        Commands::Risk(args) => commands::risk::execute(args, &config, format)?,
    }

    Ok(())
}

/// Logs go to stderr so that stdout carries only results.
fn init_logging(verbose: u8, quiet: bool) {
    let default = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn,tenor=info",
        (false, 1) => "warn,tenor=debug",
        (false, _) => "warn,tenor=trace",
    };

    // RUST_LOG wins unless --verbose was given
    let filter = if verbose > 0 {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
