//! Bond command implementation.
//!
//! Solves yield to maturity, call and worst, and reports durations.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tenor_bonds::prelude::*;
use tenor_config::AnalysisConfig;

use crate::cli::OutputFormat;
use crate::commands::yield_solver;
use crate::output::{print_report, KeyValue};

/// Arguments for the bond command.
#[derive(Args, Debug)]
pub struct BondArgs {
    /// Market price
    #[arg(long, allow_hyphen_values = true)]
    pub price: f64,

    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(long)]
    pub coupon: f64,

    /// Price paid on the call date
    #[arg(long)]
    pub call_price: f64,

    /// Face value
    #[arg(long, default_value = "100")]
    pub face: f64,

    /// Years until the call date
    #[arg(long)]
    pub years_to_call: f64,

    /// Years until maturity
    #[arg(long)]
    pub years_to_maturity: f64,

    /// Coupon payments per year
    #[arg(long, default_value = "2")]
    pub frequency: u32,

    /// Root-finding method (overrides the configuration file)
    #[arg(long, value_enum)]
    pub method: Option<YieldMethod>,
}

#[derive(Serialize)]
struct BondOutput<'a> {
    bond: &'a Bond,
    #[serde(flatten)]
    report: BondReport,
}

/// Execute the bond command.
pub fn execute(args: BondArgs, config: &AnalysisConfig, format: OutputFormat) -> Result<()> {
    let bond = Bond::builder()
        .price(args.price)
        .coupon_percent(args.coupon)
        .call_price(args.call_price)
        .face_value(args.face)
        .years_to_call(args.years_to_call)
        .years_to_maturity(args.years_to_maturity)
        .periods_per_year(args.frequency)
        .build()?;

    let mut settings = config.solver;
    if let Some(method) = args.method {
        settings.method = method;
    }
    let analyzer = BondAnalyzer::new(yield_solver(&settings));
    let report = analyzer.report(&bond)?;
    let a = report.analytics;

    for (name, solution) in [("ytm", &report.ytm_solution), ("ytc", &report.ytc_solution)] {
        if solution.method != analyzer.solver().method() {
            tracing::info!("{name}: no root in the search range, best grid candidate used");
        }
    }

    let rows = vec![
        KeyValue::new("Coupon", format!("{}%", bond.coupon_percent())),
        KeyValue::new("Remaining Periods", bond.remaining_periods().to_string()),
        KeyValue::new("", ""), // Separator
        KeyValue::from_percent("Yield to Maturity", a.ytm),
        KeyValue::from_percent("Yield to Call", a.ytc),
        KeyValue::from_percent("Yield to Worst", a.ytw),
        KeyValue::new("", ""), // Separator
        KeyValue::from_f64("Macaulay Duration", a.macaulay_duration, 4),
        KeyValue::from_f64("Modified Duration", a.modified_duration, 4),
        KeyValue::new("", ""), // Separator
        KeyValue::new(
            "Solver",
            format!(
                "{} ({} / {} iterations)",
                report.ytm_solution.method, report.ytm_solution.iterations, report.ytc_solution.iterations
            ),
        ),
    ];

    let (ytm, ytc, ytw, mac, modified) = a.as_tuple();
    print_report(
        "Bond Analytics",
        &rows,
        &BondOutput { bond: &bond, report },
        &[ytm, ytc, ytw, mac, modified],
        format,
    )
}
