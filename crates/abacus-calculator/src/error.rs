//! Error types for the arithmetic engine.
//!
//! Every variant displays as the exact message a front end shows to the user,
//! so callers can render `err.to_string()` without further mapping.

use std::fmt;

use abacus_types::{ErrorCode, OperandError};
use thiserror::Error;

/// Outcome of a single calculation.
pub type CalculationResult = Result<f64, CalculationError>;

/// Which of the two operands a parse failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandPosition {
    /// The left-hand operand `a`.
    First,
    /// The right-hand operand `b`.
    Second,
}

impl fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandPosition::First => f.write_str("first"),
            OperandPosition::Second => f.write_str("second"),
        }
    }
}

/// Why a calculation produced no number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// An operand is not a valid finite number. Only the first failing
    /// operand is recorded.
    #[error("Please enter valid numbers.")]
    InvalidInput {
        /// Operand that failed to parse.
        position: OperandPosition,
        /// Why it failed to parse.
        #[source]
        source: OperandError,
    },

    /// The operation tag is not one of the known tags.
    #[error("Invalid operation.")]
    InvalidOperation {
        /// The rejected tag, as supplied.
        tag: String,
    },

    /// The divisor compared equal to zero.
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

impl CalculationError {
    /// Machine-readable code for API responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            CalculationError::InvalidInput { .. } => ErrorCode::InvalidInput,
            CalculationError::InvalidOperation { .. } => ErrorCode::InvalidOperation,
            CalculationError::DivisionByZero => ErrorCode::DivisionByZero,
        }
    }

    /// Error category for logging.
    pub fn category(&self) -> &'static str {
        match self {
            CalculationError::InvalidInput { .. } => "input",
            CalculationError::InvalidOperation { .. } => "operation",
            CalculationError::DivisionByZero => "arithmetic",
        }
    }

    /// Wraps an operand parse failure.
    pub fn invalid_input(position: OperandPosition, source: OperandError) -> Self {
        CalculationError::InvalidInput { position, source }
    }
}
