//! # Tenor Bonds
//!
//! Yield and duration analytics for a single option-free or callable bond.
//!
//! This crate provides:
//!
//! - **Instrument**: An immutable [`Bond`] built from its quoted terms
//! - **Pricing**: Price-minus-market residuals to maturity and to the call date
//! - **Yields**: Yield to maturity, yield to call and yield to worst
//! - **Duration**: Macaulay and modified duration
//!
//! ## Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//!
//! let bond = Bond::builder()
//!     .price(95.0)
//!     .coupon_percent(5.0)
//!     .call_price(100.0)
//!     .face_value(100.0)
//!     .years_to_call(5.0)
//!     .years_to_maturity(10.0)
//!     .periods_per_year(2)
//!     .build()
//!     .unwrap();
//!
//! let analytics = BondAnalyzer::default().analyze(&bond).unwrap();
//! assert!(analytics.ytm > 0.05);
//! assert_eq!(analytics.ytw, analytics.ytm.min(analytics.ytc));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::return_self_not_must_use)]

pub mod analytics;
pub mod bond;
pub mod duration;
pub mod error;
pub mod pricing;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{BondAnalytics, BondAnalyzer, BondReport};
    pub use crate::bond::{Bond, BondBuilder};
    pub use crate::duration::{macaulay_duration, modified_duration};
    pub use crate::error::{BondError, BondResult};
    pub use crate::yields::{YieldMethod, YieldSolution, YieldSolver};
}

pub use analytics::{BondAnalytics, BondAnalyzer, BondReport};
pub use bond::Bond;
pub use yields::{YieldMethod, YieldSolver};
pub use error::{BondError, BondResult};
