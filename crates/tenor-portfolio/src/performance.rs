//! Risk-adjusted performance measures.

use tenor_math::statistics::{mean, std_dev, Ddof};

use crate::error::{PortfolioError, PortfolioResult};
use crate::returns::{ensure_finite, ReturnMatrix, Weights};
use crate::volatility::portfolio_std_dev;

/// CAPM alpha measured against the risk-free rate:
/// `mean(port) - rf + beta * (mean(market) - rf)`.
///
/// Independent of the regression intercept.
pub fn alpha_rf(port: &[f64], risk_free_rate: f64, market: &[f64], beta: f64) -> PortfolioResult<f64> {
    ensure_finite("portfolio returns", port)?;
    ensure_finite("market returns", market)?;
    let port_mean = mean(port)?;
    let market_mean = mean(market)?;
    Ok(port_mean - risk_free_rate + beta * (market_mean - risk_free_rate))
}

/// Sharpe ratio: `(mean(port) - rf) / sqrt(wᵀΣw)`.
///
/// The denominator comes from the asset covariance, not from `port` itself.
pub fn sharpe_ratio(
    port: &[f64],
    risk_free_rate: f64,
    returns: &ReturnMatrix,
    weights: &Weights,
) -> PortfolioResult<f64> {
    let excess = mean(port)? - risk_free_rate;
    let sigma = portfolio_std_dev(returns, weights)?;
    if sigma == 0.0 {
        return Err(PortfolioError::degenerate("sharpe ratio: zero portfolio volatility"));
    }
    Ok(excess / sigma)
}

/// Tracking error: population standard deviation of `port - market`.
pub fn tracking_error(port: &[f64], market: &[f64]) -> PortfolioResult<f64> {
    if port.len() != market.len() {
        return Err(PortfolioError::dimension_mismatch(
            "market returns",
            port.len(),
            market.len(),
        ));
    }
    ensure_finite("portfolio returns", port)?;
    ensure_finite("market returns", market)?;
    let active: Vec<f64> = port.iter().zip(market).map(|(p, m)| p - m).collect();
    Ok(std_dev(&active, Ddof::Population)?)
}
