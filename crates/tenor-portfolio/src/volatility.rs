//! Portfolio variance from the sample covariance of asset returns.
//!
//! "Volatility" here is the quadratic-form variance `wᵀΣw`. Its square root
//! is [`portfolio_std_dev`].

use tenor_math::statistics::{covariance_matrix, Ddof};

use crate::error::{PortfolioError, PortfolioResult};
use crate::returns::{ReturnMatrix, Weights};

/// Rounding below zero tolerated before a variance is treated as invalid.
const NEGATIVE_VARIANCE_TOLERANCE: f64 = 1e-12;

/// Portfolio variance `wᵀΣw` with `Σ` the sample (n - 1) covariance of the
/// asset rows.
///
/// Slightly negative results from rounding are clamped to zero. Anything
/// below `-1e-12` means the covariance is not positive semi-definite and is
/// reported as [`PortfolioError::NumericalDegeneracy`].
pub fn portfolio_volatility(returns: &ReturnMatrix, weights: &Weights) -> PortfolioResult<f64> {
    weights.check_against(returns)?;

    let covariance = covariance_matrix(returns.as_matrix(), Ddof::Sample)?;
    let w = weights.to_vector();
    let variance = (w.transpose() * &covariance * &w)[(0, 0)];

    if variance < -NEGATIVE_VARIANCE_TOLERANCE || !variance.is_finite() {
        return Err(PortfolioError::degenerate(format!(
            "portfolio variance: covariance produced {variance:.3e}"
        )));
    }

    Ok(variance.max(0.0))
}

/// Square root of [`portfolio_volatility`].
pub fn portfolio_std_dev(returns: &ReturnMatrix, weights: &Weights) -> PortfolioResult<f64> {
    portfolio_volatility(returns, weights).map(f64::sqrt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::returns::portfolio_returns;
    use approx::assert_relative_eq;
    use tenor_math::statistics::variance;

    fn sample() -> ReturnMatrix {
        ReturnMatrix::from_rows(&[vec![0.01, -0.02, 0.03, 0.00], vec![0.02, 0.01, -0.01, 0.02]])
            .unwrap()
    }

    #[test]
    fn test_two_asset_variance() {
        let w = Weights::new(vec![0.5, 0.5]).unwrap();
        assert_relative_eq!(portfolio_volatility(&sample(), &w).unwrap(), 7.5e-5, epsilon = 1e-15);
        assert_relative_eq!(
            portfolio_std_dev(&sample(), &w).unwrap(),
            0.00866025403784439,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_matches_variance_of_weighted_series() {
        let w = Weights::new(vec![0.3, 0.9]).unwrap();
        let port = portfolio_returns(&sample(), &w).unwrap();
        assert_relative_eq!(
            portfolio_volatility(&sample(), &w).unwrap(),
            variance(&port, Ddof::Sample).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_hedged_portfolio_is_zero() {
        // Two perfectly correlated assets, long one and short the other
        let m = ReturnMatrix::from_rows(&[vec![0.01, 0.02, -0.01], vec![0.01, 0.02, -0.01]]).unwrap();
        let w = Weights::new(vec![1.0, -1.0]).unwrap();
        let v = portfolio_volatility(&m, &w).unwrap();
        assert!(v >= 0.0);
        assert!(v < 1e-15);
    }

    #[test]
    fn test_single_asset() {
        let m = ReturnMatrix::from_rows(&[vec![0.01, 0.03]]).unwrap();
        let w = Weights::new(vec![2.0]).unwrap();
        // 4 * var([0.01, 0.03]) = 4 * 2e-4
        assert_relative_eq!(portfolio_volatility(&m, &w).unwrap(), 8e-4, epsilon = 1e-15);
    }
}
