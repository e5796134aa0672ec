//! The bond instrument and its validating builder.

use serde::Serialize;

use crate::error::{BondError, BondResult};

/// A fixed-coupon bond with a single call date.
///
/// Instances are only obtainable through [`Bond::builder`], which enforces
/// the invariants every analytic relies on: positive prices and face value,
/// a positive number of remaining coupon periods, and a call date no later
/// than maturity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bond {
    price: f64,
    coupon_percent: f64,
    call_price: f64,
    face_value: f64,
    years_to_call: f64,
    years_to_maturity: f64,
    periods_per_year: u32,
}

impl Bond {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> BondBuilder {
        BondBuilder::default()
    }

    /// Market price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Annual coupon rate in percent (5.0 means 5%).
    #[must_use]
    pub fn coupon_percent(&self) -> f64 {
        self.coupon_percent
    }

    /// Annual coupon rate as a fraction.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_percent / 100.0
    }

    /// Price paid if the bond is called.
    #[must_use]
    pub fn call_price(&self) -> f64 {
        self.call_price
    }

    /// Face (par) value repaid at maturity.
    #[must_use]
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Years until the call date.
    #[must_use]
    pub fn years_to_call(&self) -> f64 {
        self.years_to_call
    }

    /// Years until maturity.
    #[must_use]
    pub fn years_to_maturity(&self) -> f64 {
        self.years_to_maturity
    }

    /// Coupon payments per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        self.periods_per_year
    }

    /// Remaining coupon periods, truncated to whole periods.
    #[must_use]
    pub fn remaining_periods(&self) -> u32 {
        remaining_periods(self.years_to_maturity, self.periods_per_year)
    }

    /// Total coupon paid per year.
    #[must_use]
    pub fn annual_coupon(&self) -> f64 {
        self.coupon_rate() * self.face_value
    }

    /// Coupon paid each period.
    #[must_use]
    pub fn periodic_coupon(&self) -> f64 {
        self.annual_coupon() / f64::from(self.periods_per_year)
    }
}

fn remaining_periods(years: f64, periods_per_year: u32) -> u32 {
    // `as` saturates, and callers have already rejected non-finite years.
    (years * f64::from(periods_per_year)).floor() as u32
}

/// Builder for [`Bond`].
#[derive(Debug, Clone, Default)]
pub struct BondBuilder {
    price: Option<f64>,
    coupon_percent: Option<f64>,
    call_price: Option<f64>,
    face_value: Option<f64>,
    years_to_call: Option<f64>,
    years_to_maturity: Option<f64>,
    periods_per_year: Option<u32>,
}

impl BondBuilder {
    /// Sets the market price.
    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the annual coupon rate in percent.
    #[must_use]
    pub fn coupon_percent(mut self, coupon_percent: f64) -> Self {
        self.coupon_percent = Some(coupon_percent);
        self
    }

    /// Sets the call price.
    #[must_use]
    pub fn call_price(mut self, call_price: f64) -> Self {
        self.call_price = Some(call_price);
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, face_value: f64) -> Self {
        self.face_value = Some(face_value);
        self
    }

    /// Sets the years until the call date.
    #[must_use]
    pub fn years_to_call(mut self, years: f64) -> Self {
        self.years_to_call = Some(years);
        self
    }

    /// Sets the years until maturity.
    #[must_use]
    pub fn years_to_maturity(mut self, years: f64) -> Self {
        self.years_to_maturity = Some(years);
        self
    }

    /// Sets the number of coupon payments per year.
    #[must_use]
    pub fn periods_per_year(mut self, periods: u32) -> Self {
        self.periods_per_year = Some(periods);
        self
    }

    /// Validates the terms and builds the bond.
    pub fn build(self) -> BondResult<Bond> {
        let price = self.price.ok_or_else(|| BondError::missing_field("price"))?;
        let coupon_percent = self
            .coupon_percent
            .ok_or_else(|| BondError::missing_field("coupon_percent"))?;
        let call_price = self
            .call_price
            .ok_or_else(|| BondError::missing_field("call_price"))?;
        let face_value = self
            .face_value
            .ok_or_else(|| BondError::missing_field("face_value"))?;
        let years_to_call = self
            .years_to_call
            .ok_or_else(|| BondError::missing_field("years_to_call"))?;
        let years_to_maturity = self
            .years_to_maturity
            .ok_or_else(|| BondError::missing_field("years_to_maturity"))?;
        let periods_per_year = self
            .periods_per_year
            .ok_or_else(|| BondError::missing_field("periods_per_year"))?;

        positive("price", price)?;
        positive("call_price", call_price)?;
        positive("face_value", face_value)?;
        non_negative("coupon_percent", coupon_percent)?;
        positive("years_to_call", years_to_call)?;
        non_negative("years_to_maturity", years_to_maturity)?;

        if periods_per_year == 0 {
            return Err(BondError::invalid_input(
                "periods_per_year",
                "must be at least 1",
            ));
        }
        if years_to_call > years_to_maturity {
            return Err(BondError::invalid_input(
                "years_to_call",
                format!(
                    "call date ({years_to_call} years) is after maturity ({years_to_maturity} years)"
                ),
            ));
        }
        if remaining_periods(years_to_maturity, periods_per_year) == 0 {
            return Err(BondError::invalid_input(
                "years_to_maturity",
                format!(
                    "{years_to_maturity} years leaves no whole coupon period at {periods_per_year} per year"
                ),
            ));
        }

        Ok(Bond {
            price,
            coupon_percent,
            call_price,
            face_value,
            years_to_call,
            years_to_maturity,
            periods_per_year,
        })
    }
}

fn positive(field: &'static str, value: f64) -> BondResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BondError::invalid_input(
            field,
            format!("must be positive and finite, got {value}"),
        ))
    }
}

fn non_negative(field: &'static str, value: f64) -> BondResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BondError::invalid_input(
            field,
            format!("must be non-negative and finite, got {value}"),
        ))
    }
}
