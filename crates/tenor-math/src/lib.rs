//! # Tenor Math
//!
//! Numerical building blocks shared by the Tenor bond and portfolio engines.
//!
//! This crate provides:
//!
//! - **Solvers**: Root-finding algorithms (Brent, Bisection, dense grid scan)
//! - **Integration**: Adaptive Gauss-Kronrod quadrature, including semi-infinite intervals
//! - **Statistics**: Means, variances and covariance matrices of return series
//! - **Linear Algebra**: LU decomposition and linear system solves
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: No state survives a call
//! - **Explicit failure**: Degenerate inputs return a [`MathError`] instead of NaN

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]

pub mod error;
pub mod integration;
pub mod linear_algebra;
pub mod solvers;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::integration::{
        integrate, integrate_to, integrate_to_with_split, QuadratureConfig, QuadratureResult,
    };
    pub use crate::linear_algebra::solve_linear_system;
    pub use crate::solvers::{
        bisection, brent, grid_search, GridSpec, SolverConfig, SolverResult,
    };
    pub use crate::statistics::{covariance_matrix, mean, std_dev, variance, Ddof};
}

pub use error::{MathError, MathResult};
