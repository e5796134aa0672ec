//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file could not be used.
    #[error("Invalid data in {path}: {message}")]
    Data {
        /// File being read.
        path: String,
        /// What went wrong.
        message: String,
    },

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Bond analytics error.
    #[error(transparent)]
    Bond(#[from] tenor_bonds::BondError),

    /// Portfolio analytics error.
    #[error(transparent)]
    Portfolio(#[from] tenor_portfolio::PortfolioError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] tenor_config::ConfigError),
}

impl CliError {
    /// Creates a data error for `path`.
    pub fn data(path: &std::path::Path, message: impl Into<String>) -> Self {
        Self::Data {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
