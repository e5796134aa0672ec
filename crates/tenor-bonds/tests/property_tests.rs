//! Property-based tests for bond yield and duration invariants.
//!
//! - A par bond yields its coupon rate
//! - Yield to worst is the lower of the two yields
//! - Modified duration never exceeds Macaulay duration
//! - Bracketed solvers agree with the grid scan to within one step

use proptest::prelude::*;
use tenor_bonds::prelude::*;

const GRID_STEP: f64 = 0.0001;

fn bond(
    price: f64,
    coupon: f64,
    call_price: f64,
    years_to_call: f64,
    years_to_maturity: f64,
    periods_per_year: u32,
) -> Bond {
    Bond::builder()
        .price(price)
        .coupon_percent(coupon)
        .call_price(call_price)
        .face_value(100.0)
        .years_to_call(years_to_call)
        .years_to_maturity(years_to_maturity)
        .periods_per_year(periods_per_year)
        .build()
        .unwrap()
}

fn frequency() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(2u32), Just(4u32), Just(12u32)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn par_bond_yields_coupon(
        coupon in 1u32..=15,
        years in 1u32..=30,
        ppy in frequency(),
    ) {
        let coupon = f64::from(coupon);
        let b = bond(100.0, coupon, 100.0, f64::from(years), f64::from(years), ppy);
        let ytm = YieldSolver::grid().yield_to_maturity(&b).unwrap().yield_value;

        // One periodic grid step, annualized
        let tolerance = f64::from(ppy) * GRID_STEP + 1e-12;
        prop_assert!((ytm - coupon / 100.0).abs() <= tolerance, "ytm {} for coupon {}", ytm, coupon);
    }

    #[test]
    fn yield_to_worst_is_min(
        price in 80.0f64..120.0,
        coupon in 0.0f64..10.0,
        call_price in 95.0f64..110.0,
        call_years in 1u32..=10,
        extra_years in 0u32..=20,
        ppy in frequency(),
    ) {
        let maturity = f64::from(call_years + extra_years);
        let b = bond(price, coupon, call_price, f64::from(call_years), maturity, ppy);
        let analytics = BondAnalyzer::new(YieldSolver::grid()).analyze(&b).unwrap();

        prop_assert_eq!(analytics.ytw, analytics.ytm.min(analytics.ytc));
        prop_assert!(analytics.ytw <= analytics.ytm);
        prop_assert!(analytics.ytw <= analytics.ytc);
    }

    #[test]
    fn modified_duration_bounded_by_macaulay(
        price in 80.0f64..120.0,
        coupon in 0.0f64..10.0,
        years in 1u32..=30,
        ppy in frequency(),
    ) {
        let b = bond(price, coupon, 100.0, 1.0, f64::from(years), ppy);
        let analytics = BondAnalyzer::default().analyze(&b).unwrap();

        prop_assert!(analytics.macaulay_duration > 0.0);
        if analytics.ytm > 0.0 {
            prop_assert!(analytics.modified_duration < analytics.macaulay_duration);
        } else {
            prop_assert!(analytics.modified_duration >= analytics.macaulay_duration);
        }
    }

    #[test]
    fn bracketed_methods_match_grid(
        price in 85.0f64..115.0,
        coupon in 1.0f64..10.0,
        call_years in 1u32..=10,
        extra_years in 0u32..=20,
        ppy in frequency(),
    ) {
        let maturity = f64::from(call_years + extra_years);
        let b = bond(price, coupon, 100.0, f64::from(call_years), maturity, ppy);
        let grid = BondAnalyzer::new(YieldSolver::grid()).analyze(&b).unwrap();

        for method in [YieldMethod::Brent, YieldMethod::Bisection] {
            let solved = BondAnalyzer::new(YieldSolver::new().with_method(method))
                .analyze(&b)
                .unwrap();
            prop_assert!((solved.ytm - grid.ytm).abs() <= f64::from(ppy) * GRID_STEP + 1e-9);
            prop_assert!((solved.ytc - grid.ytc).abs() <= GRID_STEP + 1e-9);
        }
    }
}

#[test]
fn scenario_discount_callable() {
    let b = bond(95.0, 5.0, 100.0, 5.0, 10.0, 2);
    let analytics = BondAnalyzer::new(YieldSolver::grid()).analyze(&b).unwrap();

    assert!((analytics.ytm - 0.0566).abs() < 1e-9);
    assert!((analytics.ytc - 0.0618).abs() < 1e-9);
    assert_eq!(analytics.ytw, analytics.ytm);
    assert!((analytics.macaulay_duration - 10.854_268_693).abs() < 1e-8);
    assert!((analytics.modified_duration - 10.555_546_721).abs() < 1e-8);
}

#[test]
fn scenario_deep_discount() {
    let b = bond(80.0, 5.0, 100.0, 5.0, 10.0, 2);
    let analytics = BondAnalyzer::new(YieldSolver::grid()).analyze(&b).unwrap();

    assert!((analytics.ytm - 0.0794).abs() < 1e-9);
    assert!((analytics.ytc - 0.1021).abs() < 1e-9);
    assert!((analytics.macaulay_duration - 12.889_444_07).abs() < 1e-7);
}
