//! CAPM regression of portfolio returns on market returns.

use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use tenor_math::linear_algebra::solve_linear_system;
use tenor_math::MathError;

use crate::error::{PortfolioError, PortfolioResult};
use crate::returns::ensure_finite;

/// Ordinary least squares fit `port = alpha + beta * market`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapmRegression {
    /// Intercept.
    pub alpha: f64,
    /// Slope.
    pub beta: f64,
    /// Coefficient of determination, clamped to `[0, 1]`.
    pub r_squared: f64,
    /// Fitted portfolio returns, one per period.
    pub fitted: Vec<f64>,
}

/// Regresses `port` on `market` with an intercept.
///
/// The 2x2 normal equations are solved by LU decomposition. The market
/// series needs at least two distinct values for the slope to be defined.
///
/// ```rust
/// use tenor_portfolio::regression::capm_regression;
///
/// let market = [0.01, -0.02, 0.015, 0.0];
/// let port: Vec<f64> = market.iter().map(|m| 0.001 + 1.2 * m).collect();
/// let fit = capm_regression(&port, &market).unwrap();
/// assert!((fit.beta - 1.2).abs() < 1e-10);
/// assert!((fit.alpha - 0.001).abs() < 1e-12);
/// ```
pub fn capm_regression(port: &[f64], market: &[f64]) -> PortfolioResult<CapmRegression> {
    if port.len() != market.len() {
        return Err(PortfolioError::dimension_mismatch(
            "market returns",
            port.len(),
            market.len(),
        ));
    }
    let t = port.len();
    if t < 2 {
        return Err(PortfolioError::insufficient_data(2, t));
    }
    ensure_finite("portfolio returns", port)?;
    ensure_finite("market returns", market)?;

    let (lo, hi) = market
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &m| (lo.min(m), hi.max(m)));
    if lo == hi {
        return Err(PortfolioError::degenerate(
            "capm regression: market returns are constant",
        ));
    }

    let n = t as f64;
    let sum_x: f64 = market.iter().sum();
    let sum_xx: f64 = market.iter().map(|x| x * x).sum();
    let sum_y: f64 = port.iter().sum();
    let sum_xy: f64 = market.iter().zip(port).map(|(x, y)| x * y).sum();

    let normal = DMatrix::from_row_slice(2, 2, &[n, sum_x, sum_x, sum_xx]);
    let rhs = DVector::from_column_slice(&[sum_y, sum_xy]);
    let coefficients = solve_linear_system(&normal, &rhs).map_err(|e| match e {
        MathError::SingularMatrix => {
            PortfolioError::degenerate("capm regression: singular normal equations")
        }
        other => other.into(),
    })?;
    let (alpha, beta) = (coefficients[0], coefficients[1]);

    let fitted: Vec<f64> = market.iter().map(|x| alpha + beta * x).collect();
    let mean_y = sum_y / n;
    let ssr: f64 = port.iter().zip(&fitted).map(|(y, f)| (y - f).powi(2)).sum();
    let tss: f64 = port.iter().map(|y| (y - mean_y).powi(2)).sum();
    let sum_yy: f64 = port.iter().map(|y| y * y).sum();

    let r_squared = if tss <= f64::EPSILON * sum_yy {
        // A flat portfolio series is fitted exactly by the intercept
        1.0
    } else {
        (1.0 - ssr / tss).clamp(0.0, 1.0)
    };

    log::trace!("capm regression over {t} periods: alpha={alpha:.6e} beta={beta:.6} r2={r_squared:.6}");

    Ok(CapmRegression {
        alpha,
        beta,
        r_squared,
        fitted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PORT: [f64; 4] = [0.015, -0.005, 0.01, 0.01];
    const MARKET: [f64; 4] = [0.01, -0.01, 0.005, 0.012];

    #[test]
    fn test_noisy_fit() {
        let fit = capm_regression(&PORT, &MARKET).unwrap();
        assert_relative_eq!(fit.alpha, 0.004026958719460825, epsilon = 1e-12);
        assert_relative_eq!(fit.beta, 0.8171861836562765, epsilon = 1e-10);
        assert_relative_eq!(fit.r_squared, 0.8807451090517645, epsilon = 1e-10);
        assert_eq!(fit.fitted.len(), 4);
        assert_relative_eq!(fit.fitted[1], fit.alpha - 0.01 * fit.beta, epsilon = 1e-15);
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut market = MARKET;
            market[1] = bad;
            assert!(matches!(
                capm_regression(&PORT, &market),
                Err(PortfolioError::InvalidInput { .. })
            ));
            let mut port = PORT;
            port[2] = bad;
            assert!(matches!(
                capm_regression(&port, &MARKET),
                Err(PortfolioError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_exact_linear_relation() {
        let market = [0.02, -0.01, 0.03, 0.0, -0.02];
        let port: Vec<f64> = market.iter().map(|m| -0.002 + 0.7 * m).collect();
        let fit = capm_regression(&port, &market).unwrap();
        assert_relative_eq!(fit.alpha, -0.002, epsilon = 1e-12);
        assert_relative_eq!(fit.beta, 0.7, epsilon = 1e-10);
        assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_flat_portfolio() {
        let fit = capm_regression(&[0.01, 0.01, 0.01], &[0.01, 0.02, -0.01]).unwrap();
        assert_relative_eq!(fit.beta, 0.0, epsilon = 1e-10);
        assert_relative_eq!(fit.r_squared, 1.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            capm_regression(&PORT, &MARKET[..3]),
            Err(PortfolioError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            capm_regression(&[0.01], &[0.02]),
            Err(PortfolioError::InsufficientData { required: 2, actual: 1 })
        ));
        assert!(matches!(
            capm_regression(&PORT, &[0.01; 4]),
            Err(PortfolioError::NumericalDegeneracy { .. })
        ));
    }
}
