//! # Tenor Config
//!
//! Parameter sets for the Tenor analytics, loadable from TOML.
//!
//! - [`SolverSettings`]: yield root-finding method, tolerance and search grid
//! - [`RiskParameters`]: risk-free rate and Value-at-Risk inputs
//! - [`AnalysisConfig`]: both, as one file
//!
//! Every field has a default, so a partial file (or an empty one) is valid.
//!
//! ```rust
//! use tenor_config::{AnalysisConfig, YieldMethod, Validate};
//!
//! let config = AnalysisConfig::from_toml_str(
//!     r#"
//!     [solver]
//!     method = "grid"
//!
//!     [risk]
//!     var_cutoff = -0.05
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.solver.method, YieldMethod::Grid);
//! assert_eq!(config.risk.var_cutoff, -0.05);
//! assert_eq!(config.risk.risk_free_rate, 0.02);
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod risk;
pub mod solver;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use risk::RiskParameters;
pub use solver::SolverSettings;
pub use tenor_bonds::YieldMethod;

/// Complete analysis configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Yield solver settings.
    pub solver: SolverSettings,
    /// Portfolio risk parameters.
    pub risk: RiskParameters,
}

impl AnalysisConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Deserialization(e.to_string()))?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }
}

impl Validate for AnalysisConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.solver.validate();
        errors.extend(self.risk.validate());
        errors
    }
}
