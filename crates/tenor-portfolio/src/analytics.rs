//! One-call bundle of the portfolio-versus-market analytics.

use serde::Serialize;

use crate::error::{PortfolioError, PortfolioResult};
use crate::performance::{alpha_rf, sharpe_ratio, tracking_error};
use crate::regression::capm_regression;
use crate::returns::{ensure_finite, portfolio_returns, ReturnMatrix, Weights};
use crate::volatility::portfolio_volatility;

/// Regression, performance and dispersion figures for a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioMetrics {
    /// Regression intercept.
    pub alpha: f64,
    /// Regression slope.
    pub beta: f64,
    /// Regression R².
    pub r_squared: f64,
    /// Fitted portfolio returns.
    pub regression: Vec<f64>,
    /// Alpha against the risk-free rate.
    pub alpha_rf: f64,
    /// Portfolio variance `wᵀΣw`.
    pub volatility: f64,
    /// Sharpe ratio.
    pub sharpe_ratio: f64,
    /// Tracking error against the market.
    pub tracking_error: f64,
}

/// Computes [`PortfolioMetrics`] for `weights` over `returns` against
/// `market`.
///
/// `market` must have one value per period of `returns`.
pub fn analyze_portfolio(
    returns: &ReturnMatrix,
    weights: &Weights,
    market: &[f64],
    risk_free_rate: f64,
) -> PortfolioResult<PortfolioMetrics> {
    if market.len() != returns.n_periods() {
        return Err(PortfolioError::dimension_mismatch(
            "market returns",
            returns.n_periods(),
            market.len(),
        ));
    }
    ensure_finite("market returns", market)?;
    if !risk_free_rate.is_finite() {
        return Err(PortfolioError::invalid_input(format!(
            "risk-free rate must be finite, got {risk_free_rate}"
        )));
    }

    let port = portfolio_returns(returns, weights)?;
    let fit = capm_regression(&port, market)?;

    Ok(PortfolioMetrics {
        alpha: fit.alpha,
        beta: fit.beta,
        r_squared: fit.r_squared,
        alpha_rf: alpha_rf(&port, risk_free_rate, market, fit.beta)?,
        volatility: portfolio_volatility(returns, weights)?,
        sharpe_ratio: sharpe_ratio(&port, risk_free_rate, returns, weights)?,
        tracking_error: tracking_error(&port, market)?,
        regression: fit.fitted,
    })
}
