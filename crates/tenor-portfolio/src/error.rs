//! Error types for portfolio analytics.

use thiserror::Error;

/// A specialized Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio analytics.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// An input value is out of range.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's invalid.
        reason: String,
    },

    /// Two inputs that must line up do not.
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// What was being compared.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Not enough observations.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required observations.
        required: usize,
        /// Observations supplied.
        actual: usize,
    },

    /// The inputs are valid but the quantity is undefined for them.
    #[error("Numerically degenerate {operation}")]
    NumericalDegeneracy {
        /// The operation and its cause.
        operation: String,
    },

    /// Math library error.
    #[error("Math error: {0}")]
    Math(#[from] tenor_math::MathError),
}

impl PortfolioError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates a numerical degeneracy error.
    #[must_use]
    pub fn degenerate(operation: impl Into<String>) -> Self {
        Self::NumericalDegeneracy {
            operation: operation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::dimension_mismatch("weights", 3, 2);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch for weights: expected 3, got 2"
        );

        let err = PortfolioError::degenerate("sharpe ratio: zero volatility");
        assert_eq!(err.to_string(), "Numerically degenerate sharpe ratio: zero volatility");
    }
}
