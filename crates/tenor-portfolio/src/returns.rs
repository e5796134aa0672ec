//! Return matrices, weights and the weighted portfolio series.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Periodic returns of `N` assets over `T` periods.
///
/// Rows are assets and columns are time-ordered periods. Construction
/// guarantees at least one asset, at least two periods and finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnMatrix {
    data: DMatrix<f64>,
}

impl ReturnMatrix {
    /// Wraps an `N x T` matrix after validating it.
    pub fn new(data: DMatrix<f64>) -> PortfolioResult<Self> {
        let (assets, periods) = data.shape();
        if assets == 0 {
            return Err(PortfolioError::insufficient_data(1, 0));
        }
        if periods < 2 {
            return Err(PortfolioError::insufficient_data(2, periods));
        }
        if let Some((index, value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            // column-major storage
            return Err(PortfolioError::invalid_input(format!(
                "return for asset {} in period {} is not finite: {value}",
                index % assets,
                index / assets
            )));
        }
        Ok(Self { data })
    }

    /// Builds the matrix from one series per asset.
    pub fn from_rows(rows: &[Vec<f64>]) -> PortfolioResult<Self> {
        let first = rows
            .first()
            .ok_or_else(|| PortfolioError::insufficient_data(1, 0))?;
        let periods = first.len();
        if let Some(row) = rows.iter().find(|row| row.len() != periods) {
            return Err(PortfolioError::dimension_mismatch(
                "asset return series",
                periods,
                row.len(),
            ));
        }
        Self::new(DMatrix::from_fn(rows.len(), periods, |i, j| rows[i][j]))
    }

    /// Builds the matrix from one price series per asset.
    pub fn from_prices(prices: &[Vec<f64>], method: PriceReturn) -> PortfolioResult<Self> {
        let rows = prices
            .iter()
            .map(|series| price_returns(series, method))
            .collect::<PortfolioResult<Vec<_>>>()?;
        Self::from_rows(&rows)
    }

    /// Number of assets (rows).
    #[must_use]
    pub fn n_assets(&self) -> usize {
        self.data.nrows()
    }

    /// Number of periods (columns).
    #[must_use]
    pub fn n_periods(&self) -> usize {
        self.data.ncols()
    }

    /// The underlying matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Returns of one asset.
    #[must_use]
    pub fn asset(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.n_assets()).then(|| self.data.row(index).iter().copied().collect())
    }
}

/// Portfolio weights, one per asset.
///
/// Weights need not sum to one; see [`Weights::is_normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Weights {
    values: Vec<f64>,
}

impl Weights {
    /// Creates a weight vector.
    pub fn new(values: Vec<f64>) -> PortfolioResult<Self> {
        if values.is_empty() {
            return Err(PortfolioError::insufficient_data(1, 0));
        }
        if let Some((i, w)) = values.iter().enumerate().find(|(_, w)| !w.is_finite()) {
            return Err(PortfolioError::invalid_input(format!(
                "weight {i} is not finite: {w}"
            )));
        }
        Ok(Self { values })
    }

    /// Equal weights over `n` assets.
    pub fn equal(n: usize) -> PortfolioResult<Self> {
        Self::new(vec![1.0 / n as f64; n])
    }

    /// Number of weights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty weights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of the weights.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// True if the weights sum to one within `tolerance`.
    #[must_use]
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.sum() - 1.0).abs() <= tolerance
    }

    /// Rescales the weights to sum to one.
    pub fn normalized(&self) -> PortfolioResult<Self> {
        let total = self.sum();
        if total.abs() < f64::EPSILON {
            return Err(PortfolioError::degenerate(
                "weight normalization: weights sum to zero",
            ));
        }
        Self::new(self.values.iter().map(|w| w / total).collect())
    }

    /// The weights as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// The weights as a column vector.
    #[must_use]
    pub fn to_vector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.values)
    }

    pub(crate) fn check_against(&self, returns: &ReturnMatrix) -> PortfolioResult<()> {
        if self.len() == returns.n_assets() {
            Ok(())
        } else {
            Err(PortfolioError::dimension_mismatch(
                "weights",
                returns.n_assets(),
                self.len(),
            ))
        }
    }
}

impl TryFrom<Vec<f64>> for Weights {
    type Error = PortfolioError;

    fn try_from(values: Vec<f64>) -> PortfolioResult<Self> {
        Self::new(values)
    }
}

impl From<Weights> for Vec<f64> {
    fn from(weights: Weights) -> Self {
        weights.values
    }
}

/// How a price series is turned into returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceReturn {
    /// Period-over-period: `p[t] / p[t-1] - 1`, one fewer value than prices.
    #[default]
    Simple,
    /// Relative to the first price: `p[t] / p[0] - 1`, starting at zero.
    Cumulative,
}

/// Converts a price series into returns.
pub fn price_returns(prices: &[f64], method: PriceReturn) -> PortfolioResult<Vec<f64>> {
    if prices.len() < 2 {
        return Err(PortfolioError::insufficient_data(2, prices.len()));
    }
    if let Some((i, p)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(PortfolioError::invalid_input(format!(
            "price {i} must be positive and finite, got {p}"
        )));
    }

    let returns = match method {
        PriceReturn::Simple => prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect(),
        PriceReturn::Cumulative => {
            let base = prices[0];
            prices.iter().map(|p| p / base - 1.0).collect()
        }
    };
    Ok(returns)
}

/// Rejects a return series holding NaN or an infinity.
pub(crate) fn ensure_finite(what: &str, series: &[f64]) -> PortfolioResult<()> {
    match series.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((i, v)) => Err(PortfolioError::invalid_input(format!(
            "{what} period {i} is not finite: {v}"
        ))),
        None => Ok(()),
    }
}

/// Weighted portfolio return for each period: `w · R`.
pub fn portfolio_returns(returns: &ReturnMatrix, weights: &Weights) -> PortfolioResult<Vec<f64>> {
    weights.check_against(returns)?;
    let series = returns.as_matrix().tr_mul(&weights.to_vector());
    Ok(series.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> ReturnMatrix {
        ReturnMatrix::from_rows(&[vec![0.01, -0.02, 0.03, 0.00], vec![0.02, 0.01, -0.01, 0.02]])
            .unwrap()
    }

    #[test]
    fn test_portfolio_returns() {
        let weights = Weights::new(vec![0.5, 0.5]).unwrap();
        let port = portfolio_returns(&sample(), &weights).unwrap();
        let expected = [0.015, -0.005, 0.01, 0.01];
        assert_eq!(port.len(), 4);
        for (p, e) in port.iter().zip(expected) {
            assert_relative_eq!(*p, e, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_weight_count_must_match() {
        let weights = Weights::new(vec![1.0]).unwrap();
        let err = portfolio_returns(&sample(), &weights).unwrap_err();
        assert!(matches!(
            err,
            PortfolioError::DimensionMismatch { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn test_matrix_validation() {
        assert!(ReturnMatrix::from_rows(&[]).is_err());
        assert!(matches!(
            ReturnMatrix::from_rows(&[vec![0.01]]),
            Err(PortfolioError::InsufficientData { required: 2, actual: 1 })
        ));
        assert!(matches!(
            ReturnMatrix::from_rows(&[vec![0.01, 0.02], vec![0.01]]),
            Err(PortfolioError::DimensionMismatch { .. })
        ));
        let err = ReturnMatrix::from_rows(&[vec![0.01, 0.02], vec![0.01, f64::NAN]]).unwrap_err();
        assert!(err.to_string().contains("asset 1 in period 1"));
    }

    #[test]
    fn test_asset_row() {
        let m = sample();
        assert_eq!(m.n_assets(), 2);
        assert_eq!(m.n_periods(), 4);
        assert_eq!(m.asset(1).unwrap(), vec![0.02, 0.01, -0.01, 0.02]);
        assert!(m.asset(2).is_none());
    }

    #[test]
    fn test_weights() {
        let w = Weights::new(vec![0.2, 0.3]).unwrap();
        assert!(!w.is_normalized(1e-9));
        let n = w.normalized().unwrap();
        assert!(n.is_normalized(1e-12));
        assert_relative_eq!(n.as_slice()[0], 0.4, epsilon = 1e-15);

        assert!(Weights::new(vec![]).is_err());
        assert!(Weights::new(vec![0.5, f64::INFINITY]).is_err());
        assert!(Weights::new(vec![1.0, -1.0]).unwrap().normalized().is_err());
        assert!(Weights::equal(4).unwrap().is_normalized(1e-12));
    }

    #[test]
    fn test_weights_deserialize_validates() {
        let w: Weights = serde_json::from_str("[0.25, 0.75]").unwrap();
        assert_eq!(w.len(), 2);
        assert!(serde_json::from_str::<Weights>("[]").is_err());
    }

    #[test]
    fn test_price_returns() {
        let prices = [100.0, 110.0, 99.0];
        let simple = price_returns(&prices, PriceReturn::Simple).unwrap();
        assert_eq!(simple.len(), 2);
        assert_relative_eq!(simple[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(simple[1], -0.1, epsilon = 1e-12);

        let cumulative = price_returns(&prices, PriceReturn::Cumulative).unwrap();
        assert_eq!(cumulative.len(), 3);
        assert_relative_eq!(cumulative[0], 0.0);
        assert_relative_eq!(cumulative[2], -0.01, epsilon = 1e-12);

        assert!(price_returns(&[100.0], PriceReturn::Simple).is_err());
        assert!(price_returns(&[100.0, 0.0], PriceReturn::Simple).is_err());
    }

    #[test]
    fn test_from_prices() {
        let m = ReturnMatrix::from_prices(
            &[vec![100.0, 101.0, 102.01], vec![50.0, 50.0, 55.0]],
            PriceReturn::Simple,
        )
        .unwrap();
        assert_eq!(m.n_periods(), 2);
        assert_relative_eq!(m.as_matrix()[(0, 1)], 0.01, epsilon = 1e-12);
        assert_relative_eq!(m.as_matrix()[(1, 1)], 0.1, epsilon = 1e-12);
    }
}
