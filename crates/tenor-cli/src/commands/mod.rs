//! CLI command implementations.

pub mod bond;
pub mod portfolio;
pub mod risk;

// Re-export submodules for convenience
pub use bond::BondArgs;
pub use portfolio::PortfolioArgs;
pub use risk::RiskArgs;

use std::path::{Path, PathBuf};

use clap::Args;
use tenor_bonds::YieldSolver;
use tenor_config::{AnalysisConfig, SolverSettings};
use tenor_math::solvers::GridSpec;
use tenor_portfolio::prelude::{PriceReturn, ReturnMatrix, Weights};
use tenor_portfolio::returns::price_returns;

use crate::data::read_series;
use crate::error::{CliError, CliResult};

/// Loads the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> CliResult<AnalysisConfig> {
    match path {
        Some(path) => {
            tracing::info!("loading configuration from {}", path.display());
            Ok(AnalysisConfig::from_file(path)?)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

/// Builds the yield solver described by `settings`.
pub fn yield_solver(settings: &SolverSettings) -> YieldSolver {
    YieldSolver::new()
        .with_method(settings.method)
        .with_grid(GridSpec::new(
            settings.grid_start,
            settings.grid_end,
            settings.grid_step,
        ))
        .with_tolerance(settings.tolerance)
        .with_max_iterations(settings.max_iterations)
}

/// Where the asset series come from.
#[derive(Args, Debug)]
pub struct ReturnInput {
    /// CSV file with one column per asset and one row per period
    #[arg(short, long)]
    pub returns: PathBuf,

    /// Treat the file as prices and derive period-over-period returns
    #[arg(long)]
    pub prices: bool,

    /// With --prices, measure returns from the first price instead
    #[arg(long, requires = "prices")]
    pub cumulative: bool,

    /// Portfolio weights, one per asset column; equal weights if omitted
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub weights: Option<Vec<f64>>,
}

impl ReturnInput {
    /// How prices become returns, if they do.
    pub fn conversion(&self) -> Option<PriceReturn> {
        match (self.prices, self.cumulative) {
            (false, _) => None,
            (true, false) => Some(PriceReturn::Simple),
            (true, true) => Some(PriceReturn::Cumulative),
        }
    }

    /// Reads the asset matrix.
    pub fn load_returns(&self) -> CliResult<ReturnMatrix> {
        let table = read_series(&self.returns)?;
        let matrix = match self.conversion() {
            Some(method) => ReturnMatrix::from_prices(&table.columns, method),
            None => ReturnMatrix::from_rows(&table.columns),
        }
        .map_err(|e| CliError::data(&self.returns, e.to_string()))?;

        tracing::info!(
            "{} assets over {} periods ({})",
            matrix.n_assets(),
            matrix.n_periods(),
            table.names.join(", ")
        );
        Ok(matrix)
    }

    /// Reads one series, converted the same way as the asset matrix.
    pub fn load_series(&self, path: &Path, column: Option<&str>) -> CliResult<Vec<f64>> {
        let series = read_series(path)?.column(column, path)?;
        match self.conversion() {
            Some(method) => price_returns(&series, method)
                .map_err(|e| CliError::data(path, e.to_string())),
            None => Ok(series),
        }
    }

    /// The portfolio weights for `n_assets` assets.
    pub fn weights(&self, n_assets: usize) -> CliResult<Weights> {
        let weights = match &self.weights {
            Some(values) => {
                if values.len() != n_assets {
                    return Err(CliError::InvalidArgument(format!(
                        "{} weights given for {n_assets} assets",
                        values.len()
                    )));
                }
                Weights::new(values.clone())?
            }
            None => {
                tracing::info!("no weights given, using equal weights");
                Weights::equal(n_assets)?
            }
        };

        if !weights.is_normalized(1e-6) {
            tracing::warn!("weights sum to {:.6}, not 1", weights.sum());
        }
        Ok(weights)
    }
}
