//! # Tenor Portfolio
//!
//! Risk analytics for a weighted portfolio of assets observed over a common
//! set of periods.
//!
//! This crate provides:
//!
//! - **Inputs**: A validated [`ReturnMatrix`] (assets x periods) and [`Weights`]
//! - **Volatility**: The covariance quadratic form `wᵀΣw`
//! - **Regression**: CAPM alpha, beta and R² against a market series
//! - **Performance**: Risk-free alpha, Sharpe ratio and tracking error
//! - **Risk**: Analytical Value-at-Risk and Expected Shortfall under Normal
//!   and Student-t assumptions, plus historical VaR
//!
//! ## Example
//!
//! ```rust
//! use tenor_portfolio::prelude::*;
//!
//! let returns = ReturnMatrix::from_rows(&[
//!     vec![0.01, -0.02, 0.03, 0.00],
//!     vec![0.02, 0.01, -0.01, 0.02],
//! ])
//! .unwrap();
//! let weights = Weights::new(vec![0.5, 0.5]).unwrap();
//!
//! let port = portfolio_returns(&returns, &weights).unwrap();
//! assert!((port[0] - 0.015).abs() < 1e-12);
//!
//! let variance = portfolio_volatility(&returns, &weights).unwrap();
//! assert!((variance - 7.5e-5).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::return_self_not_must_use)]

pub mod analytics;
pub mod error;
pub mod performance;
pub mod regression;
pub mod returns;
pub mod risk;
pub mod volatility;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{analyze_portfolio, PortfolioMetrics};
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::performance::{alpha_rf, sharpe_ratio, tracking_error};
    pub use crate::regression::{capm_regression, CapmRegression};
    pub use crate::returns::{portfolio_returns, PriceReturn, ReturnMatrix, Weights};
    pub use crate::risk::{historical_var, risk_metrics, RiskMetrics, VarSpec};
    pub use crate::volatility::{portfolio_std_dev, portfolio_volatility};
}

pub use error::{PortfolioError, PortfolioResult};
