//! Portfolio command implementation.
//!
//! Regresses the weighted portfolio on a market series and reports
//! risk-adjusted performance.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use tenor_config::AnalysisConfig;
use tenor_portfolio::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::ReturnInput;
use crate::output::{print_report, KeyValue};

/// Arguments for the portfolio command.
#[derive(Args, Debug)]
pub struct PortfolioArgs {
    #[command(flatten)]
    pub input: ReturnInput,

    /// CSV file with the market (benchmark) series
    #[arg(short, long)]
    pub market: PathBuf,

    /// Column of the market file to use; the first column if omitted
    #[arg(long)]
    pub market_column: Option<String>,

    /// Risk-free rate per period (overrides the configuration file)
    #[arg(long, allow_hyphen_values = true)]
    pub risk_free_rate: Option<f64>,
}

/// Execute the portfolio command.
pub fn execute(args: PortfolioArgs, config: &AnalysisConfig, format: OutputFormat) -> Result<()> {
    let returns = args.input.load_returns()?;
    let weights = args.input.weights(returns.n_assets())?;
    let market = args
        .input
        .load_series(&args.market, args.market_column.as_deref())?;
    let risk_free_rate = args.risk_free_rate.unwrap_or(config.risk.risk_free_rate);

    let metrics = analyze_portfolio(&returns, &weights, &market, risk_free_rate)?;

    let rows = vec![
        KeyValue::from_f64("R-Squared", metrics.r_squared, 6),
        KeyValue::from_f64("Beta", metrics.beta, 6),
        KeyValue::from_f64("Alpha (regression)", metrics.alpha, 6),
        KeyValue::from_f64("Alpha (risk-free)", metrics.alpha_rf, 6),
        KeyValue::new("", ""), // Separator
        KeyValue::from_sci("Volatility (variance)", metrics.volatility),
        KeyValue::from_f64("Sharpe Ratio", metrics.sharpe_ratio, 6),
        KeyValue::from_f64("Tracking Error", metrics.tracking_error, 6),
        KeyValue::new("", ""), // Separator
        KeyValue::from_percent("Risk-Free Rate", risk_free_rate),
        KeyValue::new("Periods", returns.n_periods().to_string()),
    ];

    print_report(
        "Portfolio Analytics",
        &rows,
        &metrics,
        &[
            metrics.alpha,
            metrics.beta,
            metrics.r_squared,
            metrics.alpha_rf,
            metrics.volatility,
            metrics.sharpe_ratio,
            metrics.tracking_error,
        ],
        format,
    )
}
