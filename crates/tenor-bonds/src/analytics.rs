//! The full set of analytics for one bond.

use serde::Serialize;

use crate::bond::Bond;
use crate::duration::{macaulay_duration, modified_duration};
use crate::error::BondResult;
use crate::yields::{yield_to_worst, YieldSolution, YieldSolver};

/// Yields and durations of a bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondAnalytics {
    /// Yield to maturity.
    pub ytm: f64,
    /// Yield to call.
    pub ytc: f64,
    /// Yield to worst.
    pub ytw: f64,
    /// Macaulay duration.
    pub macaulay_duration: f64,
    /// Modified duration.
    pub modified_duration: f64,
}

impl BondAnalytics {
    /// `(ytm, ytc, ytw, macaulay, modified)`.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.ytm,
            self.ytc,
            self.ytw,
            self.macaulay_duration,
            self.modified_duration,
        )
    }
}

/// Computes [`BondAnalytics`] with a configured [`YieldSolver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BondAnalyzer {
    solver: YieldSolver,
}

/// Analytics together with the yield solves behind them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondReport {
    /// Headline analytics.
    pub analytics: BondAnalytics,
    /// Yield to maturity solve.
    pub ytm_solution: YieldSolution,
    /// Yield to call solve.
    pub ytc_solution: YieldSolution,
}

impl BondAnalyzer {
    /// Creates an analyzer using `solver` for both yields.
    #[must_use]
    pub fn new(solver: YieldSolver) -> Self {
        Self { solver }
    }

    /// The solver in use.
    #[must_use]
    pub fn solver(&self) -> &YieldSolver {
        &self.solver
    }

    /// Computes the analytics.
    pub fn analyze(&self, bond: &Bond) -> BondResult<BondAnalytics> {
        self.report(bond).map(|report| report.analytics)
    }

    /// Computes the analytics and keeps the underlying yield solutions.
    pub fn report(&self, bond: &Bond) -> BondResult<BondReport> {
        let (ytm, ytc) = self.solve_both(bond);
        let (ytm_solution, ytc_solution) = (ytm?, ytc?);

        let macaulay = macaulay_duration(bond);
        let analytics = BondAnalytics {
            ytm: ytm_solution.yield_value,
            ytc: ytc_solution.yield_value,
            ytw: yield_to_worst(ytm_solution.yield_value, ytc_solution.yield_value),
            macaulay_duration: macaulay,
            modified_duration: modified_duration(
                macaulay,
                ytm_solution.yield_value,
                bond.periods_per_year(),
            ),
        };

        log::debug!(
            "bond analytics: ytm={:.6} ({}, {} iters) ytc={:.6} ({}, {} iters)",
            analytics.ytm,
            ytm_solution.method,
            ytm_solution.iterations,
            analytics.ytc,
            ytc_solution.method,
            ytc_solution.iterations
        );

        Ok(BondReport {
            analytics,
            ytm_solution,
            ytc_solution,
        })
    }

    #[cfg(feature = "parallel")]
    fn solve_both(&self, bond: &Bond) -> (BondResult<YieldSolution>, BondResult<YieldSolution>) {
        rayon::join(
            || self.solver.yield_to_maturity(bond),
            || self.solver.yield_to_call(bond),
        )
    }

    #[cfg(not(feature = "parallel"))]
    fn solve_both(&self, bond: &Bond) -> (BondResult<YieldSolution>, BondResult<YieldSolution>) {
        (
            self.solver.yield_to_maturity(bond),
            self.solver.yield_to_call(bond),
        )
    }
}
