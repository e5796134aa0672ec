//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Failure modes shared by the solvers, quadrature and linear algebra.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// The iteration budget ran out before the tolerance was met.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Iterations performed.
        iterations: u32,
        /// |f(x)| at the last iterate.
        residual: f64,
    },

    /// The endpoints do not straddle a sign change.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Left endpoint.
        a: f64,
        /// Right endpoint.
        b: f64,
        /// f(a).
        fa: f64,
        /// f(b).
        fb: f64,
    },

    /// LU decomposition found a zero pivot.
    #[error("Singular matrix: cannot invert")]
    SingularMatrix,

    /// Operand shapes do not line up.
    #[error("Incompatible matrix dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    DimensionMismatch {
        /// Left operand rows.
        rows1: usize,
        /// Left operand columns.
        cols1: usize,
        /// Right operand rows.
        rows2: usize,
        /// Right operand columns.
        cols2: usize,
    },

    /// Too few observations.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum accepted.
        required: usize,
        /// Supplied.
        actual: usize,
    },

    /// An argument is outside its domain.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },

    /// Quadrature did not reach the requested tolerance.
    #[error("Integration did not converge after {evaluations} evaluations (error estimate: {abs_error:.2e})")]
    IntegrationFailed {
        /// Number of integrand evaluations performed.
        evaluations: usize,
        /// Absolute error estimate when the budget ran out.
        abs_error: f64,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));

        let err = MathError::insufficient_data(2, 1);
        assert_eq!(err.to_string(), "Insufficient data: need at least 2, got 1");
    }
}
