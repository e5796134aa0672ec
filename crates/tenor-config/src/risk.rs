//! Portfolio risk parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Inputs to the performance and Value-at-Risk measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskParameters {
    /// Risk-free rate per period, for alpha and the Sharpe ratio.
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Return level below which outcomes count toward VaR.
    #[serde(default = "default_var_cutoff")]
    pub var_cutoff: f64,

    /// Tail probability for Expected Shortfall.
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    /// Degrees of freedom of the Student-t model.
    #[serde(default = "default_degrees_of_freedom")]
    pub degrees_of_freedom: f64,
}

fn default_risk_free_rate() -> f64 {
    0.02
}

fn default_var_cutoff() -> f64 {
    -0.09
}

fn default_confidence() -> f64 {
    0.05
}

fn default_degrees_of_freedom() -> f64 {
    5.0
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
            var_cutoff: default_var_cutoff(),
            confidence: default_confidence(),
            degrees_of_freedom: default_degrees_of_freedom(),
        }
    }
}

impl Validate for RiskParameters {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.risk_free_rate.is_finite() {
            errors.push(ValidationError::new("risk.risk_free_rate", "Risk-free rate must be finite"));
        }

        if !self.var_cutoff.is_finite() {
            errors.push(ValidationError::new("risk.var_cutoff", "VaR cutoff must be finite"));
        }

        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            errors.push(ValidationError::with_rule(
                "risk.confidence",
                format!("Confidence {} must lie strictly between 0 and 1", self.confidence),
                "open_unit_interval",
            ));
        }

        if !(self.degrees_of_freedom.is_finite() && self.degrees_of_freedom > 1.0) {
            errors.push(ValidationError::with_rule(
                "risk.degrees_of_freedom",
                format!(
                    "Degrees of freedom {} must exceed 1 for the Student-t shortfall",
                    self.degrees_of_freedom
                ),
                "t_mean_exists",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let r = RiskParameters::default();
        assert_eq!(r.risk_free_rate, 0.02);
        assert_eq!(r.var_cutoff, -0.09);
        assert_eq!(r.confidence, 0.05);
        assert_eq!(r.degrees_of_freedom, 5.0);
        assert!(r.is_valid());
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let r = RiskParameters {
            confidence: 1.0,
            degrees_of_freedom: 1.0,
            ..RiskParameters::default()
        };
        let rules: Vec<_> = r.validate().into_iter().filter_map(|e| e.rule).collect();
        assert_eq!(rules, vec!["open_unit_interval", "t_mean_exists"]);

        let r = RiskParameters {
            var_cutoff: f64::NAN,
            ..RiskParameters::default()
        };
        assert_eq!(r.validate().len(), 1);
    }
}
