//! 7-point Gauss / 15-point Kronrod rule.

use crate::error::{MathError, MathResult};

/// Kronrod abscissae on `[-1, 1]`, positive half, descending.
/// Odd indices are the Gauss-7 abscissae.
const XGK: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.000000000000000000000000000000000,
];

/// Kronrod weights matching `XGK`.
const WGK: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714,
];

/// Gauss weights for `XGK[1], XGK[3], XGK[5], XGK[7]`.
const WG: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327,
];

/// One evaluated subinterval.
#[derive(Debug, Clone, Copy)]
pub(super) struct Segment {
    pub a: f64,
    pub b: f64,
    pub value: f64,
    pub error: f64,
}

/// Applies the G7/K15 pair on `[a, b]`.
pub(super) fn kronrod_15<F>(f: &F, a: f64, b: f64) -> MathResult<Segment>
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let eval = |x: f64| -> MathResult<f64> {
        let fx = f(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(MathError::invalid_input(format!("integrand is not finite at {x}")))
        }
    };

    let f_center = eval(center)?;
    let mut kronrod = WGK[7] * f_center;
    let mut gauss = WG[3] * f_center;

    for j in 0..7 {
        let dx = half * XGK[j];
        let sum = eval(center - dx)? + eval(center + dx)?;
        kronrod += WGK[j] * sum;
        if j % 2 == 1 {
            gauss += WG[j / 2] * sum;
        }
    }

    Ok(Segment {
        a,
        b,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_sum_to_two() {
        let kronrod: f64 = WGK[7] + 2.0 * WGK[..7].iter().sum::<f64>();
        let gauss: f64 = WG[3] + 2.0 * WG[..3].iter().sum::<f64>();

        assert_relative_eq!(kronrod, 2.0, epsilon = 1e-14);
        assert_relative_eq!(gauss, 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_gauss_exact_for_cubic() {
        let segment = kronrod_15(&|x: f64| x * x * x + x, -1.0, 3.0).unwrap();

        // Both rules are exact, so the error estimate collapses
        assert_relative_eq!(segment.value, 24.0, epsilon = 1e-12);
        assert!(segment.error < 1e-12);
    }

    #[test]
    fn test_non_finite_integrand() {
        assert!(kronrod_15(&|_x: f64| f64::INFINITY, 0.0, 1.0).is_err());
    }
}
