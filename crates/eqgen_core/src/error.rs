//! Error types for eqgen_core crate.

use thiserror::Error;

/// Errors that can occur while building, evaluating or checking equations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    /// Result requested by symbol for an operator other than `+` or `-`
    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(char),

    /// Factory discriminator did not name a known variant
    #[error("invalid equation type: {0}")]
    InvalidEquationType(String),

    /// Checker bounds with the lower bound above the upper bound
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
}
