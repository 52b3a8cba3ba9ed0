//! Numerical settings of the balancer.
//!
//! The defaults are what [`balance`](crate::balance) uses. A TOML file may
//! override any subset of them:
//!
//! ```toml
//! pivot_tolerance = 1e-12
//! max_denominator = 100000
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChembalError;
use crate::solver::PIVOT_TOLERANCE;

/// Tolerances used by the solver and the rational normalizer.
///
/// # Examples
///
/// ```
/// use chembal::BalanceConfig;
///
/// let config = BalanceConfig::from_toml_str("max_denominator = 1000").unwrap();
/// assert_eq!(config.max_denominator, 1000);
/// assert_eq!(config.pivot_tolerance, BalanceConfig::default().pivot_tolerance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BalanceConfig {
    /// Pivots with an absolute value below this are treated as zero.
    pub pivot_tolerance: f64,
    /// Relative error accepted when turning a solution value into a fraction.
    pub rational_tolerance: f64,
    /// Largest denominator the fraction search may produce.
    pub max_denominator: i64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: PIVOT_TOLERANCE,
            rational_tolerance: 1e-9,
            max_denominator: 1_000_000,
        }
    }
}

impl BalanceConfig {
    /// Reads a configuration from TOML text; missing keys keep their defaults.
    ///
    /// # Errors
    /// [`ChembalError::Config`] if the text is not valid TOML, has unknown
    /// keys, or has values of the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, ChembalError> {
        Ok(toml::from_str(text)?)
    }
}
