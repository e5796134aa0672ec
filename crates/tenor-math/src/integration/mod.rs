//! Numerical integration.
//!
//! Adaptive Gauss-Kronrod quadrature over finite intervals and over the
//! semi-infinite interval `(-inf, upper]`. Each subinterval is evaluated
//! with the 15-point Kronrod rule; the embedded 7-point Gauss rule gives the
//! error estimate. The subinterval with the largest error is bisected until
//! the total error is within tolerance.
//!
//! # Example
//!
//! ```rust
//! use tenor_math::integration::{integrate, QuadratureConfig};
//!
//! let result = integrate(|x: f64| x.sin(), 0.0, std::f64::consts::PI, &QuadratureConfig::default()).unwrap();
//! assert!((result.value - 2.0).abs() < 1e-12);
//! ```

mod gauss_kronrod;

use crate::error::{MathError, MathResult};
use gauss_kronrod::{kronrod_15, Segment};

/// Default absolute tolerance.
pub const DEFAULT_ABS_TOLERANCE: f64 = 1.49e-8;

/// Default relative tolerance.
pub const DEFAULT_REL_TOLERANCE: f64 = 1.49e-8;

/// Default cap on the number of subintervals.
pub const DEFAULT_MAX_SUBDIVISIONS: usize = 50;

/// Configuration for adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureConfig {
    /// Absolute error target.
    pub abs_tolerance: f64,
    /// Relative error target.
    pub rel_tolerance: f64,
    /// Maximum number of subintervals.
    pub max_subdivisions: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tolerance: DEFAULT_ABS_TOLERANCE,
            rel_tolerance: DEFAULT_REL_TOLERANCE,
            max_subdivisions: DEFAULT_MAX_SUBDIVISIONS,
        }
    }
}

impl QuadratureConfig {
    /// Sets both tolerances.
    #[must_use]
    pub fn with_tolerance(mut self, abs_tolerance: f64, rel_tolerance: f64) -> Self {
        self.abs_tolerance = abs_tolerance;
        self.rel_tolerance = rel_tolerance;
        self
    }

    /// Sets the subdivision cap.
    #[must_use]
    pub fn with_max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.max_subdivisions = max_subdivisions;
        self
    }
}

/// Result of a quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult {
    /// Estimated integral.
    pub value: f64,
    /// Estimated absolute error.
    pub abs_error: f64,
    /// Number of integrand evaluations.
    pub evaluations: usize,
}

impl QuadratureResult {
    fn combine(self, other: Self) -> Self {
        Self {
            value: self.value + other.value,
            abs_error: self.abs_error + other.abs_error,
            evaluations: self.evaluations + other.evaluations,
        }
    }
}

/// Integrates `f` over the finite interval `[a, b]`.
///
/// Reversed bounds yield the negated integral.
pub fn integrate<F>(f: F, a: f64, b: f64, config: &QuadratureConfig) -> MathResult<QuadratureResult>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(MathError::invalid_input(
            "integration bounds must be finite; use integrate_to for (-inf, upper]",
        ));
    }
    if config.max_subdivisions == 0 {
        return Err(MathError::invalid_input("max_subdivisions must be at least 1"));
    }
    if a == b {
        return Ok(QuadratureResult {
            value: 0.0,
            abs_error: 0.0,
            evaluations: 0,
        });
    }
    if b < a {
        let result = integrate(f, b, a, config)?;
        return Ok(QuadratureResult {
            value: -result.value,
            ..result
        });
    }

    adaptive(&f, a, b, config)
}

/// Integrates `f` over `(-inf, upper]`.
///
/// Uses the substitution `x = upper - scale * (1 - s) / s` for `s` in
/// `(0, 1]`. `scale` should be of the order of the width of the region where
/// `f` carries its mass (for a density, its standard deviation).
///
/// # Example
///
/// ```rust
/// use tenor_math::integration::{integrate_to, QuadratureConfig};
///
/// let pdf = |x: f64| (-0.5 * x * x).exp() / (2.0 * std::f64::consts::PI).sqrt();
/// let result = integrate_to(pdf, 0.0, 1.0, &QuadratureConfig::default()).unwrap();
/// assert!((result.value - 0.5).abs() < 1e-8);
/// ```
pub fn integrate_to<F>(
    f: F,
    upper: f64,
    scale: f64,
    config: &QuadratureConfig,
) -> MathResult<QuadratureResult>
where
    F: Fn(f64) -> f64,
{
    if !upper.is_finite() {
        return Err(MathError::invalid_input("upper bound must be finite"));
    }
    if !(scale.is_finite() && scale > 0.0) {
        return Err(MathError::invalid_input(format!(
            "scale must be positive and finite, got {scale}"
        )));
    }
    if config.max_subdivisions == 0 {
        return Err(MathError::invalid_input("max_subdivisions must be at least 1"));
    }

    let transformed = |s: f64| {
        let t = (1.0 - s) / s;
        let fx = f(upper - scale * t);
        if fx == 0.0 {
            0.0
        } else {
            fx * scale / (s * s)
        }
    };

    adaptive(&transformed, 0.0, 1.0, config)
}

/// Integrates over `(-inf, upper]`, splitting at `split` when it lies below
/// `upper`.
///
/// The tail `(-inf, split]` is mapped with [`integrate_to`]. The finite
/// remainder `[split, upper]` is cut at `split + k * scale` for
/// `k = 1, 2, 4, 8, 16` before each piece goes to [`integrate`], so a peak
/// at `split` is resolved even when `upper` lies many scales away.
pub fn integrate_to_with_split<F>(
    f: F,
    upper: f64,
    split: f64,
    scale: f64,
    config: &QuadratureConfig,
) -> MathResult<QuadratureResult>
where
    F: Fn(f64) -> f64,
{
    if !(split.is_finite() && split < upper) {
        return integrate_to(f, upper, scale, config);
    }

    let mut total = integrate_to(&f, split, scale, config)?;
    let mut lo = split;
    for k in SCALE_BREAKS {
        let hi = split + k * scale;
        if hi >= upper {
            break;
        }
        total = total.combine(integrate(&f, lo, hi, config)?);
        lo = hi;
    }
    Ok(total.combine(integrate(&f, lo, upper, config)?))
}

const SCALE_BREAKS: [f64; 5] = [1.0, 2.0, 4.0, 8.0, 16.0];

fn adaptive<F>(f: &F, a: f64, b: f64, config: &QuadratureConfig) -> MathResult<QuadratureResult>
where
    F: Fn(f64) -> f64,
{
    let first = kronrod_15(f, a, b)?;
    let mut evaluations = 15;
    let mut segments = vec![first];

    loop {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let abs_error: f64 = segments.iter().map(|s| s.error).sum();

        if abs_error <= config.abs_tolerance.max(config.rel_tolerance * value.abs()) {
            return Ok(QuadratureResult {
                value,
                abs_error,
                evaluations,
            });
        }

        if segments.len() >= config.max_subdivisions {
            log::debug!(
                "quadrature stopped at {} subintervals (error {:.3e})",
                segments.len(),
                abs_error
            );
            return Err(MathError::IntegrationFailed {
                evaluations,
                abs_error,
            });
        }

        // Bisect the segment with the largest error estimate
        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, x), (_, y)| x.error.total_cmp(&y.error))
            .map_or(0, |(i, _)| i);
        let Segment { a: lo, b: hi, .. } = segments.swap_remove(worst);
        let mid = 0.5 * (lo + hi);

        segments.push(kronrod_15(f, lo, mid)?);
        segments.push(kronrod_15(f, mid, hi)?);
        evaluations += 30;
    }
}
