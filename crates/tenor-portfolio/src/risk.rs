//! Value-at-Risk and Expected Shortfall.
//!
//! Analytical VaR is the probability mass below a return cutoff under a
//! fitted distribution, computed by numerical quadrature so that each
//! figure carries an error estimate. Historical VaR is the observed
//! frequency of returns below the cutoff.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, ContinuousCDF, Normal, StudentsT};
use tenor_math::integration::{integrate_to_with_split, QuadratureConfig};
use tenor_math::statistics::mean;

use crate::error::{PortfolioError, PortfolioResult};
use crate::returns::{ensure_finite, portfolio_returns, ReturnMatrix, Weights};
use crate::volatility::portfolio_volatility;

/// Parameters of the analytical risk measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarSpec {
    /// Return level below which losses are counted (e.g. -0.09).
    pub cutoff: f64,
    /// Tail probability for Expected Shortfall, in `(0, 1)`.
    pub confidence: f64,
    /// Degrees of freedom of the Student-t model; must exceed 1.
    pub degrees_of_freedom: f64,
}

impl Default for VarSpec {
    fn default() -> Self {
        Self {
            cutoff: -0.09,
            confidence: 0.05,
            degrees_of_freedom: 5.0,
        }
    }
}

impl VarSpec {
    /// Creates a new parameter set.
    #[must_use]
    pub fn new(cutoff: f64, confidence: f64, degrees_of_freedom: f64) -> Self {
        Self {
            cutoff,
            confidence,
            degrees_of_freedom,
        }
    }

    fn validate(&self) -> PortfolioResult<()> {
        if !self.cutoff.is_finite() {
            return Err(PortfolioError::invalid_input(format!(
                "VaR cutoff must be finite, got {}",
                self.cutoff
            )));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(PortfolioError::invalid_input(format!(
                "confidence must be in (0, 1), got {}",
                self.confidence
            )));
        }
        if !(self.degrees_of_freedom.is_finite() && self.degrees_of_freedom > 1.0) {
            return Err(PortfolioError::invalid_input(format!(
                "Student-t expected shortfall needs more than 1 degree of freedom, got {}",
                self.degrees_of_freedom
            )));
        }
        Ok(())
    }
}

/// Analytical risk figures for a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskMetrics {
    /// Portfolio variance `wᵀΣw`.
    pub variance: f64,
    /// Portfolio standard deviation.
    pub sigma: f64,
    /// Mean portfolio return.
    pub mu: f64,
    /// Probability of a return below the cutoff under Normal(mu, sigma).
    pub var_normal: f64,
    /// Absolute error estimate of `var_normal`.
    pub var_normal_error: f64,
    /// Probability of a return below the cutoff under a standard Student-t.
    pub var_t: f64,
    /// Absolute error estimate of `var_t`.
    pub var_t_error: f64,
    /// Expected Shortfall under the Normal model.
    pub es_normal: f64,
    /// Expected Shortfall under the Student-t model.
    pub es_t: f64,
}

impl RiskMetrics {
    /// `(variance, sigma, mu, var_normal, var_normal_error, var_t,
    /// var_t_error, es_normal, es_t)`.
    #[allow(clippy::type_complexity)]
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64, f64, f64, f64, f64) {
        (
            self.variance,
            self.sigma,
            self.mu,
            self.var_normal,
            self.var_normal_error,
            self.var_t,
            self.var_t_error,
            self.es_normal,
            self.es_t,
        )
    }
}

/// Computes [`RiskMetrics`] for the weighted portfolio.
///
/// The Student-t VaR uses the standard distribution (location 0, scale 1)
/// while both Expected Shortfall figures scale by the portfolio's sigma and
/// subtract its mean.
pub fn risk_metrics(
    returns: &ReturnMatrix,
    weights: &Weights,
    spec: &VarSpec,
) -> PortfolioResult<RiskMetrics> {
    spec.validate()?;

    let variance = portfolio_volatility(returns, weights)?;
    let sigma = variance.sqrt();
    if sigma == 0.0 {
        return Err(PortfolioError::degenerate(
            "risk metrics: zero portfolio volatility leaves the Normal density undefined",
        ));
    }
    let mu = mean(&portfolio_returns(returns, weights)?)?;

    let quadrature = QuadratureConfig::default();
    let d = spec.degrees_of_freedom;

    let normal = Normal::new(mu, sigma).map_err(|e| PortfolioError::invalid_input(e.to_string()))?;
    let student = StudentsT::new(0.0, 1.0, d).map_err(|e| PortfolioError::invalid_input(e.to_string()))?;

    let var_normal = integrate_to_with_split(|x| normal.pdf(x), spec.cutoff, mu, sigma, &quadrature)?;
    let var_t = integrate_to_with_split(|x| student.pdf(x), spec.cutoff, 0.0, 1.0, &quadrature)?;

    let alpha = spec.confidence;
    let standard = Normal::standard();
    let z = standard.inverse_cdf(alpha);
    let es_normal = standard.pdf(z) * sigma / alpha - mu;

    let t_q = student.inverse_cdf(alpha);
    let es_t = student.pdf(t_q) * sigma * (d + t_q * t_q) / (alpha * (d - 1.0)) - mu;

    log::debug!(
        "risk metrics: mu={mu:.6e} sigma={sigma:.6e} var_normal={:.6} var_t={:.6} ({} + {} evaluations)",
        var_normal.value,
        var_t.value,
        var_normal.evaluations,
        var_t.evaluations
    );

    Ok(RiskMetrics {
        variance,
        sigma,
        mu,
        var_normal: var_normal.value,
        var_normal_error: var_normal.abs_error,
        var_t: var_t.value,
        var_t_error: var_t.abs_error,
        es_normal,
        es_t,
    })
}

/// Fraction of observations strictly below `cutoff`.
///
/// ```rust
/// use tenor_portfolio::risk::historical_var;
///
/// let port = [-0.10, 0.02, -0.09, 0.01];
/// assert_eq!(historical_var(&port, -0.09).unwrap(), 0.25);
/// ```
pub fn historical_var(port: &[f64], cutoff: f64) -> PortfolioResult<f64> {
    if port.is_empty() {
        return Err(PortfolioError::insufficient_data(1, 0));
    }
    if cutoff.is_nan() {
        return Err(PortfolioError::invalid_input("VaR cutoff is NaN"));
    }
    ensure_finite("portfolio returns", port)?;
    let breaches = port.iter().filter(|&&r| r < cutoff).count();
    Ok(breaches as f64 / port.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn inputs() -> (ReturnMatrix, Weights) {
        (
            ReturnMatrix::from_rows(&[vec![0.01, -0.02, 0.03, 0.00], vec![0.02, 0.01, -0.01, 0.02]])
                .unwrap(),
            Weights::new(vec![0.5, 0.5]).unwrap(),
        )
    }

    #[test]
    fn test_default_spec() {
        let (r, w) = inputs();
        let m = risk_metrics(&r, &w, &VarSpec::default()).unwrap();

        assert_relative_eq!(m.variance, 7.5e-5, epsilon = 1e-15);
        assert_relative_eq!(m.sigma, 0.00866025403784439, epsilon = 1e-12);
        assert_relative_eq!(m.mu, 0.0075, epsilon = 1e-15);
        // -0.09 is more than eleven sigmas below the mean
        assert_abs_diff_eq!(m.var_normal, 0.0, epsilon = 1e-10);
        let t_cdf = StudentsT::new(0.0, 1.0, 5.0).unwrap().cdf(-0.09);
        assert_abs_diff_eq!(m.var_t, t_cdf, epsilon = 1e-7);
        assert!(m.var_t_error >= 0.0 && m.var_t_error < 1e-6);
        assert_relative_eq!(m.es_normal, 0.010363616920129517, max_relative = 1e-7);
        assert_relative_eq!(m.es_t, 0.017529250891634096, max_relative = 1e-6);
    }

    #[test]
    fn test_normal_var_matches_cdf() {
        let (r, w) = inputs();
        let m = risk_metrics(&r, &w, &VarSpec::new(0.0, 0.05, 5.0)).unwrap();
        let expected = Normal::new(m.mu, m.sigma).unwrap().cdf(0.0);
        assert_abs_diff_eq!(m.var_normal, expected, epsilon = 1e-7);
        assert!(m.var_normal_error < 1e-6);

        let t_half = StudentsT::new(0.0, 1.0, 5.0).unwrap().cdf(0.0);
        assert_abs_diff_eq!(m.var_t, t_half, epsilon = 1e-7);
    }

    #[test]
    fn test_normal_var_with_tight_distribution() {
        let r = ReturnMatrix::from_rows(&[vec![0.0002, 0.00021, 0.00019, 0.000205, 0.000195]]).unwrap();
        let w = Weights::new(vec![1.0]).unwrap();

        for cutoff in [0.00019, 0.0002, 0.000205, 0.001, 0.01, 0.05] {
            let m = risk_metrics(&r, &w, &VarSpec::new(cutoff, 0.05, 5.0)).unwrap();
            assert_relative_eq!(m.sigma, 7.905_694_150_420_95e-6, max_relative = 1e-9);
            let expected = Normal::new(m.mu, m.sigma).unwrap().cdf(cutoff);
            assert_abs_diff_eq!(m.var_normal, expected, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_as_tuple_order() {
        let (r, w) = inputs();
        let m = risk_metrics(&r, &w, &VarSpec::default()).unwrap();
        let (variance, sigma, mu, _, _, _, _, es_n, es_t) = m.as_tuple();
        assert_eq!((variance, sigma, mu, es_n, es_t), (m.variance, m.sigma, m.mu, m.es_normal, m.es_t));
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let (r, w) = inputs();
        for spec in [
            VarSpec::new(-0.09, 0.0, 5.0),
            VarSpec::new(-0.09, 1.0, 5.0),
            VarSpec::new(-0.09, 0.05, 1.0),
            VarSpec::new(-0.09, 0.05, 0.5),
            VarSpec::new(f64::NAN, 0.05, 5.0),
        ] {
            assert!(matches!(
                risk_metrics(&r, &w, &spec),
                Err(PortfolioError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_zero_sigma_is_degenerate() {
        let r = ReturnMatrix::from_rows(&[vec![0.25, 0.25, 0.25]]).unwrap();
        let w = Weights::new(vec![1.0]).unwrap();
        assert!(matches!(
            risk_metrics(&r, &w, &VarSpec::default()),
            Err(PortfolioError::NumericalDegeneracy { .. })
        ));
    }

    #[test]
    fn test_historical_var() {
        let port = [0.015, -0.005, 0.01, 0.01];
        assert_relative_eq!(historical_var(&port, -0.09).unwrap(), 0.0);
        assert_relative_eq!(historical_var(&port, 0.0).unwrap(), 0.25);
        // strictly below: 0.01 itself is not counted
        assert_relative_eq!(historical_var(&port, 0.01).unwrap(), 0.25);
        assert_relative_eq!(historical_var(&port, 0.02).unwrap(), 1.0);
        assert!(historical_var(&[], 0.0).is_err());
        assert!(matches!(
            historical_var(&[0.01, f64::NAN], 0.0),
            Err(PortfolioError::InvalidInput { .. })
        ));
    }
}
