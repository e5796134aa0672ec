//! Macaulay and modified duration.

use crate::bond::Bond;

/// Macaulay duration of the remaining cash flows.
///
/// Cash flows are weighted by their period index `t = 1..=n` and discounted
/// at the coupon rate, not at a solved yield, then divided by the market
/// price. The result is measured in coupon periods.
///
/// ```rust
/// use tenor_bonds::prelude::*;
///
/// let zero = Bond::builder()
///     .price(100.0)
///     .coupon_percent(0.0)
///     .call_price(100.0)
///     .face_value(100.0)
///     .years_to_call(5.0)
///     .years_to_maturity(10.0)
///     .periods_per_year(2)
///     .build()
///     .unwrap();
///
/// // A zero-coupon bond at par has all its weight in the last period.
/// assert!((macaulay_duration(&zero) - 20.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn macaulay_duration(bond: &Bond) -> f64 {
    let n = bond.remaining_periods();
    let coupon = bond.periodic_coupon();
    let growth = 1.0 + bond.coupon_rate();

    let mut discount = 1.0;
    let mut weighted = 0.0;
    for t in 1..=n {
        discount /= growth;
        weighted += f64::from(t) * coupon * discount;
    }
    weighted += f64::from(n) * bond.face_value() * discount;

    weighted / bond.price()
}

/// Modified duration from a Macaulay duration and an annualized yield.
///
/// Equals the Macaulay duration when the yield is zero.
#[must_use]
pub fn modified_duration(macaulay: f64, ytm: f64, periods_per_year: u32) -> f64 {
    macaulay / (1.0 + ytm / f64::from(periods_per_year))
}
