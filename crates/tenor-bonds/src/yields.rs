//! Yield to maturity, yield to call and yield to worst.
//!
//! Both yields are roots of the pricing residuals in [`crate::pricing`]. The
//! dense grid scan is the reference method: it picks the candidate whose
//! residual is closest to zero and is exact to within one grid step.
//! Bracketed methods search the same domain and fall back to the grid scan
//! when the residual does not change sign there.
//!
//! # Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//!
//! let bond = Bond::builder()
//!     .price(100.0)
//!     .coupon_percent(5.0)
//!     .call_price(100.0)
//!     .face_value(100.0)
//!     .years_to_call(5.0)
//!     .years_to_maturity(10.0)
//!     .periods_per_year(2)
//!     .build()
//!     .unwrap();
//!
//! let ytm = YieldSolver::new().yield_to_maturity(&bond).unwrap();
//! assert!((ytm.yield_value - 0.05).abs() < 1e-8);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tenor_math::solvers::{bisection, brent, grid_search, GridSpec, SolverConfig, SolverResult};
use tenor_math::MathError;

use crate::bond::Bond;
use crate::error::{BondError, BondResult};
use crate::pricing::{ytc_residual, ytm_residual};

/// Root-finding strategy for yield calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum YieldMethod {
    /// Dense scan for the candidate with the smallest absolute residual.
    Grid,
    /// Bisection on the grid's bounds.
    Bisection,
    /// Brent's method on the grid's bounds.
    #[default]
    Brent,
}

impl fmt::Display for YieldMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Grid => "grid",
            Self::Bisection => "bisection",
            Self::Brent => "brent",
        };
        f.write_str(name)
    }
}

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldSolution {
    /// The annualized yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Iterations (or grid points) used.
    pub iterations: u32,
    /// Pricing residual at the selected yield.
    pub residual: f64,
    /// Method that produced the yield, after any fallback.
    pub method: YieldMethod,
}

/// Yield solver.
///
/// Default: Brent's method over `[0.0001, 0.9999]` with tolerance 1e-10 and
/// at most 100 iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    method: YieldMethod,
    grid: GridSpec,
    config: SolverConfig,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            method: YieldMethod::Brent,
            grid: GridSpec::default(),
            config: SolverConfig::new(1e-10, 100),
        }
    }

    /// The reference grid scan over `{0.0001, ..., 0.9999}`.
    #[must_use]
    pub fn grid() -> Self {
        Self::new().with_method(YieldMethod::Grid)
    }

    /// Sets the root-finding method.
    #[must_use]
    pub fn with_method(mut self, method: YieldMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the search domain (and the scan step for the grid method).
    #[must_use]
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Configured method.
    #[must_use]
    pub fn method(&self) -> YieldMethod {
        self.method
    }

    /// Configured search domain.
    #[must_use]
    pub fn grid_spec(&self) -> &GridSpec {
        &self.grid
    }

    /// Yield to maturity, annualized by the coupon frequency.
    pub fn yield_to_maturity(&self, bond: &Bond) -> BondResult<YieldSolution> {
        let solution = self.solve(|y| ytm_residual(bond, y))?;
        Ok(YieldSolution {
            yield_value: solution.yield_value * f64::from(bond.periods_per_year()),
            ..solution
        })
    }

    /// Yield to call, quoted on the semiannual basis of [`ytc_residual`].
    pub fn yield_to_call(&self, bond: &Bond) -> BondResult<YieldSolution> {
        self.solve(|y| ytc_residual(bond, y))
    }

    /// Yield to worst: the lower of yield to maturity and yield to call.
    pub fn yield_to_worst(&self, bond: &Bond) -> BondResult<f64> {
        let ytm = self.yield_to_maturity(bond)?;
        let ytc = self.yield_to_call(bond)?;
        Ok(yield_to_worst(ytm.yield_value, ytc.yield_value))
    }

    fn solve<F>(&self, residual: F) -> BondResult<YieldSolution>
    where
        F: Fn(f64) -> f64,
    {
        let bracketed = match self.method {
            YieldMethod::Grid => return self.scan(&residual),
            YieldMethod::Bisection => bisection(&residual, self.grid.start, self.grid.end, &self.config),
            YieldMethod::Brent => brent(&residual, self.grid.start, self.grid.end, &self.config),
        };

        match bracketed {
            Ok(result) => Ok(solution(result, self.method)),
            Err(MathError::InvalidBracket { a, b, fa, fb }) => {
                log::debug!(
                    "{} bracket [{a}, {b}] has no sign change (f = {fa:.6}, {fb:.6}), using grid scan",
                    self.method
                );
                self.scan(&residual)
            }
            Err(MathError::ConvergenceFailed { iterations, .. }) => {
                Err(BondError::YieldConvergenceFailed { iterations })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn scan<F>(&self, residual: &F) -> BondResult<YieldSolution>
    where
        F: Fn(f64) -> f64,
    {
        let result = grid_search(residual, &self.grid)?;
        Ok(solution(result, YieldMethod::Grid))
    }
}

fn solution(result: SolverResult, method: YieldMethod) -> YieldSolution {
    YieldSolution {
        yield_value: result.root,
        iterations: result.iterations,
        residual: result.residual,
        method,
    }
}

/// The lower of two yields.
#[must_use]
pub fn yield_to_worst(ytm: f64, ytc: f64) -> f64 {
    ytm.min(ytc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn bond(price: f64, call_price: f64, years_to_call: f64) -> Bond {
        Bond::builder()
            .price(price)
            .coupon_percent(5.0)
            .call_price(call_price)
            .face_value(100.0)
            .years_to_call(years_to_call)
            .years_to_maturity(10.0)
            .periods_per_year(2)
            .build()
            .unwrap()
    }

    #[test]
    fn test_grid_discount_bond() {
        let b = bond(95.0, 100.0, 5.0);
        let solver = YieldSolver::grid();

        let ytm = solver.yield_to_maturity(&b).unwrap();
        assert_abs_diff_eq!(ytm.yield_value, 0.0566, epsilon = 1e-9);
        assert_eq!(ytm.method, YieldMethod::Grid);
        assert_eq!(ytm.iterations, 9999);

        let ytc = solver.yield_to_call(&b).unwrap();
        assert_abs_diff_eq!(ytc.yield_value, 0.0618, epsilon = 1e-9);

        assert_abs_diff_eq!(solver.yield_to_worst(&b).unwrap(), 0.0566, epsilon = 1e-9);
    }

    #[test]
    fn test_brent_discount_bond() {
        let b = bond(95.0, 100.0, 5.0);
        let solver = YieldSolver::new();

        let ytm = solver.yield_to_maturity(&b).unwrap();
        assert_abs_diff_eq!(ytm.yield_value, 0.0566169, epsilon = 1e-6);
        assert!(ytm.residual.abs() < 1e-6);
        assert_eq!(ytm.method, YieldMethod::Brent);

        let ytc = solver.yield_to_call(&b).unwrap();
        assert_abs_diff_eq!(ytc.yield_value, 0.0617762, epsilon = 1e-6);
    }

    #[test]
    fn test_methods_agree_within_grid_step() {
        let b = bond(105.0, 102.0, 3.0);
        let grid = YieldSolver::grid();

        for method in [YieldMethod::Brent, YieldMethod::Bisection] {
            let solver = YieldSolver::new().with_method(method);
            let ytm = solver.yield_to_maturity(&b).unwrap().yield_value;
            let ytc = solver.yield_to_call(&b).unwrap().yield_value;
            let grid_ytm = grid.yield_to_maturity(&b).unwrap().yield_value;
            let grid_ytc = grid.yield_to_call(&b).unwrap().yield_value;
            // ytm is annualized from a periodic grid, so its step doubles
            assert_abs_diff_eq!(ytm, grid_ytm, epsilon = 2.0 * 0.0001);
            assert_abs_diff_eq!(ytc, grid_ytc, epsilon = 0.0001);
        }
    }

    #[test]
    fn test_premium_callable_worst_is_call() {
        let b = bond(105.0, 102.0, 3.0);
        let solver = YieldSolver::grid();
        let ytm = solver.yield_to_maturity(&b).unwrap().yield_value;
        let ytc = solver.yield_to_call(&b).unwrap().yield_value;

        assert_abs_diff_eq!(ytm, 0.0438, epsilon = 1e-9);
        assert_abs_diff_eq!(ytc, 0.0385, epsilon = 1e-9);
        assert_abs_diff_eq!(solver.yield_to_worst(&b).unwrap(), ytc);
    }

    #[test]
    fn test_no_sign_change_falls_back_to_grid() {
        // Priced above the undiscounted cash flows, so no positive yield
        // reprices the bond and the closest candidate is the lowest one.
        let b = bond(200.0, 100.0, 5.0);
        let ytm = YieldSolver::new().yield_to_maturity(&b).unwrap();
        assert_eq!(ytm.method, YieldMethod::Grid);
        assert_abs_diff_eq!(ytm.yield_value, 0.0002, epsilon = 1e-12);
    }

    #[test]
    fn test_iteration_cap() {
        let b = bond(95.0, 100.0, 5.0);
        let err = YieldSolver::new()
            .with_method(YieldMethod::Bisection)
            .with_max_iterations(3)
            .yield_to_maturity(&b)
            .unwrap_err();
        assert!(matches!(err, BondError::YieldConvergenceFailed { iterations: 3 }));
    }

    #[test]
    fn test_call_within_one_period() {
        // Half a semiannual period to the call date
        let b = bond(95.0, 100.0, 0.25);
        let ytc = YieldSolver::new().yield_to_call(&b).unwrap().yield_value;
        assert!(ytc > 0.25 && ytc < 0.30, "ytc {ytc}");
        assert!(ytc_residual(&b, ytc).abs() < 1e-6);
    }

    #[test]
    fn test_yield_to_worst_is_min() {
        assert_abs_diff_eq!(yield_to_worst(0.05, 0.04), 0.04);
        assert_abs_diff_eq!(yield_to_worst(0.03, 0.04), 0.03);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(YieldMethod::Brent.to_string(), "brent");
        assert_eq!(YieldMethod::default(), YieldMethod::Brent);
    }
}
