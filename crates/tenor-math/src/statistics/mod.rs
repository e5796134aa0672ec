//! Descriptive statistics for return series.
//!
//! Series are plain slices; multivariate data is a [`DMatrix`] with one
//! variable per row and one observation per column.

use crate::error::{MathError, MathResult};
use nalgebra::DMatrix;

/// Delta degrees of freedom for dispersion estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ddof {
    /// Divide by `n` (population estimate).
    Population,
    /// Divide by `n - 1` (unbiased sample estimate).
    #[default]
    Sample,
}

impl Ddof {
    /// The value subtracted from `n` in the denominator.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::Population => 0,
            Self::Sample => 1,
        }
    }

    fn denominator(self, n: usize) -> MathResult<f64> {
        let required = self.offset() + 1;
        if n < required {
            return Err(MathError::insufficient_data(required, n));
        }
        Ok((n - self.offset()) as f64)
    }
}

/// Arithmetic mean.
pub fn mean(data: &[f64]) -> MathResult<f64> {
    if data.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Variance around the mean.
///
/// # Example
///
/// ```rust
/// use tenor_math::statistics::{variance, Ddof};
///
/// let v = variance(&[1.0, 2.0, 3.0, 4.0], Ddof::Sample).unwrap();
/// assert!((v - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn variance(data: &[f64], ddof: Ddof) -> MathResult<f64> {
    let denominator = ddof.denominator(data.len())?;
    let mu = mean(data)?;
    let sum_sq: f64 = data.iter().map(|x| (x - mu) * (x - mu)).sum();
    Ok(sum_sq / denominator)
}

/// Standard deviation around the mean.
pub fn std_dev(data: &[f64], ddof: Ddof) -> MathResult<f64> {
    variance(data, ddof).map(f64::sqrt)
}

/// Covariance matrix of the rows of `data`.
///
/// Entry `(i, j)` is the covariance of variable `i` with variable `j`. The
/// result is symmetric by construction.
pub fn covariance_matrix(data: &DMatrix<f64>, ddof: Ddof) -> MathResult<DMatrix<f64>> {
    let (n_vars, n_obs) = data.shape();
    if n_vars == 0 {
        return Err(MathError::insufficient_data(1, 0));
    }
    let denominator = ddof.denominator(n_obs)?;

    let means: Vec<f64> = (0..n_vars).map(|i| data.row(i).mean()).collect();
    let mut centered = data.clone();
    for (i, mu) in means.iter().enumerate() {
        centered.row_mut(i).add_scalar_mut(-mu);
    }

    let mut cov = &centered * centered.transpose() / denominator;

    // Enforce exact symmetry against rounding in the product
    for i in 0..n_vars {
        for j in (i + 1)..n_vars {
            let avg = 0.5 * (cov[(i, j)] + cov[(j, i)]);
            cov[(i, j)] = avg;
            cov[(j, i)] = avg;
        }
    }

    Ok(cov)
}
