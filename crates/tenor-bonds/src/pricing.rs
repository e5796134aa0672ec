//! Pricing residuals for yield root-finding.
//!
//! Each residual is the model price at a candidate yield minus the market
//! price, so a yield is a root of its residual.

use crate::bond::Bond;

/// Present value of the remaining cash flows at a periodic rate `y`.
///
/// Coupons are valued as an annuity of `remaining_periods` payments and the
/// face value is discounted from maturity.
#[must_use]
pub fn price_to_maturity(bond: &Bond, periodic_yield: f64) -> f64 {
    let n = f64::from(bond.remaining_periods());
    annuity(bond.periodic_coupon(), periodic_yield, n)
        + bond.face_value() * discount(periodic_yield, n)
}

/// Present value to the call date at an annual yield `y`.
///
/// Uses the semiannual convention regardless of the bond's coupon
/// frequency: half the annual coupon per period, a periodic rate of `y / 2`
/// and `2 * years_to_call` periods (fractional periods are kept).
#[must_use]
pub fn price_to_call(bond: &Bond, annual_yield: f64) -> f64 {
    let periods = 2.0 * bond.years_to_call();
    let rate = annual_yield / 2.0;
    let coupon = bond.annual_coupon() / 2.0;
    annuity(coupon, rate, periods) + bond.call_price() * discount(rate, periods)
}

/// `price_to_maturity(bond, y) - price`.
#[must_use]
pub fn ytm_residual(bond: &Bond, periodic_yield: f64) -> f64 {
    price_to_maturity(bond, periodic_yield) - bond.price()
}

/// `price_to_call(bond, y) - price`.
#[must_use]
pub fn ytc_residual(bond: &Bond, annual_yield: f64) -> f64 {
    price_to_call(bond, annual_yield) - bond.price()
}

fn discount(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(-periods)
}

fn annuity(payment: f64, rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        payment * periods
    } else {
        payment * (1.0 - discount(rate, periods)) / rate
    }
}
