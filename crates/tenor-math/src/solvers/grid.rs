//! Dense grid scan for the closest-to-zero residual.

use crate::error::{MathError, MathResult};
use crate::solvers::SolverResult;

/// An inclusive, evenly spaced set of candidate points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// First candidate.
    pub start: f64,
    /// Last candidate (inclusive, up to rounding of the step count).
    pub end: f64,
    /// Distance between consecutive candidates.
    pub step: f64,
}

impl Default for GridSpec {
    /// The yield grid `{0.0001, 0.0002, ..., 0.9999}`.
    fn default() -> Self {
        Self {
            start: 0.0001,
            end: 0.9999,
            step: 0.0001,
        }
    }
}

impl GridSpec {
    /// Creates a grid from its bounds and step.
    #[must_use]
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Number of candidates on the grid.
    ///
    /// Candidates are generated as `start + i * step` rather than by repeated
    /// addition so rounding error does not accumulate along the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        ((self.end - self.start) / self.step + 1e-9).floor() as usize + 1
    }

    /// Returns true if the grid has no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th candidate.
    #[must_use]
    pub fn point(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    /// Iterates over all candidates in ascending order.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    fn validate(&self) -> MathResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() || !self.step.is_finite() {
            return Err(MathError::invalid_input("grid bounds and step must be finite"));
        }
        if self.step <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "grid step must be positive, got {}",
                self.step
            )));
        }
        if self.end < self.start {
            return Err(MathError::invalid_input(format!(
                "grid end {} is below start {}",
                self.end, self.start
            )));
        }
        Ok(())
    }
}

/// Scans every grid candidate and returns the one with the smallest `|f(x)|`.
///
/// Ties keep the earliest candidate. Candidates where `f` is not finite are
/// skipped. `iterations` in the result is the number of candidates scanned.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{grid_search, GridSpec};
///
/// let f = |x: f64| x - 0.12345;
/// let result = grid_search(f, &GridSpec::default()).unwrap();
/// assert!((result.root - 0.1235).abs() < 1e-9 || (result.root - 0.1234).abs() < 1e-9);
/// ```
pub fn grid_search<F>(f: F, spec: &GridSpec) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    spec.validate()?;

    let mut best: Option<(f64, f64)> = None;
    let mut scanned = 0u32;

    for x in spec.points() {
        scanned = scanned.saturating_add(1);
        let fx = f(x);
        if !fx.is_finite() {
            continue;
        }
        match best {
            Some((_, best_fx)) if best_fx.abs() <= fx.abs() => {}
            _ => best = Some((x, fx)),
        }
    }

    let (root, residual) = best.ok_or_else(|| {
        MathError::invalid_input("function is not finite anywhere on the grid")
    })?;

    log::trace!("grid scan over {scanned} points selected {root} (residual {residual:.3e})");

    Ok(SolverResult {
        root,
        iterations: scanned,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_grid_matches_reference_range() {
        let spec = GridSpec::default();

        assert_eq!(spec.len(), 9999);
        assert_relative_eq!(spec.point(0), 0.0001, epsilon = 1e-15);
        assert_relative_eq!(spec.point(spec.len() - 1), 0.9999, epsilon = 1e-12);
    }

    #[test]
    fn test_selects_closest_to_zero() {
        let f = |x: f64| (x - 0.05).powi(3);

        let result = grid_search(f, &GridSpec::default()).unwrap();

        assert_relative_eq!(result.root, 0.05, epsilon = 1e-12);
        assert_eq!(result.iterations, 9999);
    }

    #[test]
    fn test_root_outside_grid_returns_nearest_endpoint() {
        // Root at -1: the closest candidate is the first one
        let f = |x: f64| x + 1.0;

        let result = grid_search(f, &GridSpec::default()).unwrap();

        assert_relative_eq!(result.root, 0.0001, epsilon = 1e-15);
    }

    #[test]
    fn test_ties_keep_earliest() {
        let f = |_x: f64| 1.0;

        let result = grid_search(f, &GridSpec::new(0.0, 1.0, 0.25)).unwrap();

        assert_relative_eq!(result.root, 0.0);
    }

    #[test]
    fn test_skips_non_finite() {
        let f = |x: f64| if x < 0.5 { f64::NAN } else { x - 0.75 };

        let result = grid_search(f, &GridSpec::new(0.0, 1.0, 0.25)).unwrap();

        assert_relative_eq!(result.root, 0.75);
    }

    #[test]
    fn test_invalid_step() {
        let f = |x: f64| x;

        assert!(grid_search(f, &GridSpec::new(0.0, 1.0, 0.0)).is_err());
        assert!(grid_search(f, &GridSpec::new(1.0, 0.0, 0.1)).is_err());
    }

    #[test]
    fn test_all_nan_is_error() {
        let f = |_x: f64| f64::NAN;

        assert!(grid_search(f, &GridSpec::new(0.0, 1.0, 0.5)).is_err());
    }
}
