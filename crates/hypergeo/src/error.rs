//! Errors produced when converting to and from vectors.

use std::num::ParseFloatError;

use thiserror::Error;

/// Error produced when converting a slice with the wrong number of components
/// into a vector.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[error("expected {expected} components, got {got}")]
pub struct DimensionMismatch {
    /// Number of components of the target vector type.
    pub expected: u8,
    /// Number of components that were supplied.
    pub got: usize,
}

/// Error produced when parsing a vector such as `(1, 2.5, -3)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseVectorError {
    /// Missing parentheses
    #[error("vector must be surrounded by parentheses")]
    MissingParentheses,
    /// Component is not a number
    #[error("invalid component: {0}")]
    InvalidComponent(#[from] ParseFloatError),
    /// Wrong number of components
    #[error("{0}")]
    DimensionMismatch(#[from] DimensionMismatch),
}
