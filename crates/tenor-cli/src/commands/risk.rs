//! Risk command implementation.
//!
//! Analytical VaR and Expected Shortfall under Normal and Student-t models,
//! plus historical VaR of the realized portfolio series.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tenor_config::{AnalysisConfig, RiskParameters, Validate};
use tenor_portfolio::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::ReturnInput;
use crate::output::{format_percent, print_report, KeyValue};

/// Arguments for the risk command.
#[derive(Args, Debug)]
pub struct RiskArgs {
    #[command(flatten)]
    pub input: ReturnInput,

    /// Return level below which losses count toward VaR (e.g. -0.09)
    #[arg(long, allow_hyphen_values = true)]
    pub var_cutoff: Option<f64>,

    /// Tail probability for Expected Shortfall
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Degrees of freedom of the Student-t model
    #[arg(long)]
    pub dof: Option<f64>,
}

#[derive(Serialize)]
struct RiskOutput {
    var_cutoff: f64,
    confidence: f64,
    degrees_of_freedom: f64,
    #[serde(flatten)]
    metrics: RiskMetrics,
    historical_var: f64,
}

/// Execute the risk command.
pub fn execute(args: RiskArgs, config: &AnalysisConfig, format: OutputFormat) -> Result<()> {
    let params = RiskParameters {
        var_cutoff: args.var_cutoff.unwrap_or(config.risk.var_cutoff),
        confidence: args.confidence.unwrap_or(config.risk.confidence),
        degrees_of_freedom: args.dof.unwrap_or(config.risk.degrees_of_freedom),
        ..config.risk
    };
    params.validate_or_error()?;

    let returns = args.input.load_returns()?;
    let weights = args.input.weights(returns.n_assets())?;
    let spec = VarSpec::new(params.var_cutoff, params.confidence, params.degrees_of_freedom);

    let metrics = risk_metrics(&returns, &weights, &spec)?;
    let port = portfolio_returns(&returns, &weights)?;
    let h_var = historical_var(&port, spec.cutoff)?;

    let cutoff = format_percent(spec.cutoff);
    let rows = vec![
        KeyValue::from_sci("Variance", metrics.variance),
        KeyValue::from_f64("Sigma", metrics.sigma, 6),
        KeyValue::from_f64("Mean Return", metrics.mu, 6),
        KeyValue::new("", ""), // Separator
        KeyValue::new(
            format!("Analytical VaR (Normal) at {cutoff}"),
            format!(
                "{} ± {:.1e}",
                format_percent(metrics.var_normal),
                metrics.var_normal_error
            ),
        ),
        KeyValue::new(
            format!("Analytical VaR (t, d={}) at {cutoff}", spec.degrees_of_freedom),
            format!("{} ± {:.1e}", format_percent(metrics.var_t), metrics.var_t_error),
        ),
        KeyValue::from_percent(format!("Historical VaR at {cutoff}"), h_var),
        KeyValue::new("", ""), // Separator
        KeyValue::from_f64(
            format!("Expected Shortfall (Normal, {})", spec.confidence),
            metrics.es_normal,
            6,
        ),
        KeyValue::from_f64(
            format!("Expected Shortfall (t, {})", spec.confidence),
            metrics.es_t,
            6,
        ),
    ];

    let (variance, sigma, mu, var_n, var_n_err, var_t, var_t_err, es_n, es_t) = metrics.as_tuple();
    let output = RiskOutput {
        var_cutoff: spec.cutoff,
        confidence: spec.confidence,
        degrees_of_freedom: spec.degrees_of_freedom,
        metrics,
        historical_var: h_var,
    };

    print_report(
        "Portfolio Risk",
        &rows,
        &output,
        &[variance, sigma, mu, var_n, var_n_err, var_t, var_t_err, es_n, es_t, h_var],
        format,
    )
}
