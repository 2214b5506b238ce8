use serde::{Deserialize, Serialize};

use crate::ErrorCode;

/// A calculation as submitted by a front end: two raw operands and a tag.
///
/// Operands stay as text so that parse failures are reported by the engine
/// with the same message every front end shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// First operand, unparsed.
    pub a: String,
    /// Second operand, unparsed.
    pub b: String,
    /// Operation tag (`add`, `subtract`, `multiply` or `divide`).
    pub operation: String,
}

impl CalculationRequest {
    /// Builds a request from anything string-like.
    pub fn new(a: impl Into<String>, b: impl Into<String>, operation: impl Into<String>) -> Self {
        Self { a: a.into(), b: b.into(), operation: operation.into() }
    }
}

/// The outcome of a calculation, ready for a front end to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CalculationResponse {
    /// The calculation produced a number.
    Success {
        /// The raw result.
        value: f64,
        /// The rendered text, e.g. `Result: 7`.
        display: String,
    },
    /// The calculation was rejected.
    Failure {
        /// Classification of the failure.
        code: ErrorCode,
        /// The failure message.
        message: String,
        /// The text to show; identical to `message`.
        display: String,
    },
}

impl CalculationResponse {
    /// Whether this response carries a number.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The text a front end should render.
    #[must_use]
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display, .. } | Self::Failure { display, .. } => display,
        }
    }
}
