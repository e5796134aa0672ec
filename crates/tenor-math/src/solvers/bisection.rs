//! Interval halving on a sign-changing residual.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Finds a zero of `f` in `[a, b]` by repeated halving.
///
/// The endpoints may be given in either order but must carry residuals of
/// opposite sign (or one of them must already be within tolerance). A step
/// stops the search when `|f(mid)| <= tolerance`, when the half-width drops
/// below `tolerance`, or when the interval can no longer be split in `f64`.
/// The reported root is the midpoint of the last interval and `residual` is
/// `f` evaluated there.
///
/// ```rust
/// use tenor_math::solvers::{bisection, SolverConfig};
///
/// // 3-period annual bond, 4% coupon, priced at 97
/// let residual = |y: f64| {
///     let annuity = 4.0 * (1.0 - (1.0 + y).powi(-3)) / y;
///     annuity + 100.0 * (1.0 + y).powi(-3) - 97.0
/// };
/// let result = bisection(residual, 0.0001, 0.9999, &SolverConfig::default()).unwrap();
/// assert!(result.residual.abs() < 1e-8);
/// assert!(result.root > 0.04);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };
    let (f_lo, f_hi) = (f(lo), f(hi));

    let straddles = f_lo.is_finite() && f_hi.is_finite() && (f_lo > 0.0) != (f_hi > 0.0);
    let root_at_end = f_lo.abs() <= config.tolerance || f_hi.abs() <= config.tolerance;
    if !straddles && !root_at_end {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }
    if f_lo.abs() <= config.tolerance {
        return Ok(SolverResult { root: lo, iterations: 0, residual: f_lo });
    }
    if f_hi.abs() <= config.tolerance {
        return Ok(SolverResult { root: hi, iterations: 0, residual: f_hi });
    }

    let lo_positive = f_lo > 0.0;
    let mut iterations = 0;
    while iterations < config.max_iterations {
        iterations += 1;
        let mid = lo + 0.5 * (hi - lo);
        let f_mid = f(mid);

        let collapsed = mid <= lo || mid >= hi;
        if f_mid.abs() <= config.tolerance || 0.5 * (hi - lo) < config.tolerance || collapsed {
            return Ok(SolverResult { root: mid, iterations, residual: f_mid });
        }

        // Keep the half whose ends still disagree in sign
        if (f_mid > 0.0) == lo_positive {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let last = lo + 0.5 * (hi - lo);
    Err(MathError::convergence_failed(iterations, f(last).abs()))
}
