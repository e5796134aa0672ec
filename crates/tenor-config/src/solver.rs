//! Yield solver settings.

use serde::{Deserialize, Serialize};
use tenor_bonds::YieldMethod;

use crate::error::{Validate, ValidationError};

/// Settings for the yield solver.
///
/// `grid_start` and `grid_end` bound the search for every method;
/// `grid_step` is only used by the grid scan and the bracket fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Root-finding method.
    #[serde(default)]
    pub method: YieldMethod,

    /// Convergence tolerance for bracketed methods.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration cap for bracketed methods.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Lowest candidate yield.
    #[serde(default = "default_grid_start")]
    pub grid_start: f64,

    /// Highest candidate yield.
    #[serde(default = "default_grid_end")]
    pub grid_end: f64,

    /// Distance between grid candidates.
    #[serde(default = "default_grid_step")]
    pub grid_step: f64,
}

fn default_tolerance() -> f64 {
    1e-10
}

fn default_max_iterations() -> u32 {
    100
}

fn default_grid_start() -> f64 {
    0.0001
}

fn default_grid_end() -> f64 {
    0.9999
}

fn default_grid_step() -> f64 {
    0.0001
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            method: YieldMethod::default(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            grid_start: default_grid_start(),
            grid_end: default_grid_end(),
            grid_step: default_grid_step(),
        }
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.tolerance > 0.0 && self.tolerance <= 1e-4) {
            errors.push(ValidationError::with_rule(
                "solver.tolerance",
                "Solver tolerance must be between 0 and 1e-4",
                "valid_tolerance",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 10000 {
            errors.push(ValidationError::with_rule(
                "solver.max_iterations",
                "Max iterations must be between 1 and 10000",
                "valid_iterations",
            ));
        }

        if !(self.grid_start.is_finite() && self.grid_end.is_finite()) || self.grid_start >= self.grid_end {
            errors.push(ValidationError::with_rule(
                "solver.grid_start",
                format!(
                    "Grid start {} must be below grid end {}",
                    self.grid_start, self.grid_end
                ),
                "ordered_grid",
            ));
        } else if self.grid_start <= -1.0 {
            errors.push(ValidationError::with_rule(
                "solver.grid_start",
                "Yields at or below -100% cannot be discounted",
                "discountable_yield",
            ));
        }

        if !(self.grid_step > 0.0 && self.grid_step.is_finite()) {
            errors.push(ValidationError::with_rule(
                "solver.grid_step",
                "Grid step must be positive",
                "positive_step",
            ));
        } else if self.grid_step > (self.grid_end - self.grid_start).abs() {
            errors.push(ValidationError::with_rule(
                "solver.grid_step",
                "Grid step is wider than the grid",
                "step_within_grid",
            ));
        }

        errors
    }
}
