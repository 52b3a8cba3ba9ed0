//! Error types for balancing and formula parsing.
//!
//! [`ChembalError`] is the internal taxonomy. [`BalanceFailure`] is what
//! [`balance`](crate::balance) and [`solve_reaction`](crate::solve_reaction)
//! hand back to callers: one error type with a readable message, whatever
//! step failed.

use thiserror::Error;

/// Errors that can occur while parsing, solving or normalizing an equation
#[derive(Debug, Error)]
pub enum ChembalError {
    /// A parenthesized group has no matching close bracket, or a count is too large
    #[error("malformed formula '{formula}': {detail}")]
    MalformedFormula {
        /// Formula as entered.
        formula: String,
        /// What went wrong.
        detail: String,
    },

    /// Missing or duplicate arrow, or a side without molecules
    #[error("invalid equation: {0}")]
    InvalidEquation(String),

    /// No positive integer coefficients conserve every element
    #[error("no solution: {0}")]
    NoSolution(String),

    /// Matrix rows have different lengths
    #[error("wrong matrix dimensions")]
    WrongMatrixDimensions,

    /// Configuration could not be read from TOML
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl ChembalError {
    /// Creates a [`MalformedFormula`](ChembalError::MalformedFormula) error.
    pub fn malformed_formula(formula: &str, detail: impl Into<String>) -> Self {
        Self::MalformedFormula {
            formula: formula.to_string(),
            detail: detail.into(),
        }
    }

    /// Creates an [`InvalidEquation`](ChembalError::InvalidEquation) error.
    pub fn invalid_equation(detail: impl Into<String>) -> Self {
        Self::InvalidEquation(detail.into())
    }

    /// Creates a [`NoSolution`](ChembalError::NoSolution) error.
    pub fn no_solution(detail: impl Into<String>) -> Self {
        Self::NoSolution(detail.into())
    }
}

/// The single error surfaced by the balancing entry points.
///
/// Wraps whichever [`ChembalError`] aborted the balance. The `Display`
/// output is meant to be shown to an end user as is.
#[derive(Debug, Error)]
#[error("could not balance '{equation}': {cause}")]
pub struct BalanceFailure {
    equation: String,
    #[source]
    cause: ChembalError,
}

impl BalanceFailure {
    pub(crate) fn new(equation: &str, cause: ChembalError) -> Self {
        Self {
            equation: equation.to_string(),
            cause,
        }
    }

    /// The equation text that failed to balance.
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// The step-level error that aborted balancing.
    pub fn cause(&self) -> &ChembalError {
        &self.cause
    }

    /// Returns `true` if the system had no valid coefficients.
    pub fn is_no_solution(&self) -> bool {
        matches!(self.cause, ChembalError::NoSolution(_))
    }

    /// Returns `true` if the equation text itself was rejected.
    pub fn is_invalid_equation(&self) -> bool {
        matches!(self.cause, ChembalError::InvalidEquation(_))
    }

    /// Returns `true` if one of the formulas could not be parsed.
    pub fn is_malformed_formula(&self) -> bool {
        matches!(self.cause, ChembalError::MalformedFormula { .. })
    }
}
