use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of binary operations the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, rejected when `b` is zero
    Divide,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The wire tag for this operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an operation tag is not one of the known tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation tag '{tag}'")]
pub struct UnknownOperation {
    /// The rejected tag, as received.
    pub tag: String,
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == tag)
            .ok_or_else(|| UnknownOperation { tag: tag.to_string() })
    }
}

/// Reasons raw text cannot become an [`Operand`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    /// Nothing but whitespace was supplied.
    #[error("operand is empty")]
    Empty,

    /// The text does not start with a number.
    #[error("'{input}' is not a number")]
    Malformed {
        /// The input text without leading whitespace.
        input: String,
    },

    /// The text parsed, but to NaN or an infinity.
    #[error("'{input}' is not a finite number")]
    NonFinite {
        /// The input text without leading whitespace.
        input: String,
    },
}

/// A finite floating-point operand.
///
/// The only ways to obtain one are [`Operand::parse`] and [`Operand::new`], both
/// of which reject NaN and infinities.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Operand(f64);

impl Operand {
    /// Wraps an existing value, rejecting NaN and infinities.
    ///
    /// # Errors
    /// Returns [`OperandError::NonFinite`] when `value` is not finite.
    pub fn new(value: f64) -> Result<Self, OperandError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(OperandError::NonFinite { input: value.to_string() })
        }
    }

    /// Parses raw user text the way a browser's `parseFloat` does.
    ///
    /// Leading whitespace is skipped and the longest decimal or scientific
    /// prefix is taken, so `"12px"` is 12 and `"3e"` is 3. Text without a
    /// numeric prefix is rejected, as is a prefix that evaluates to NaN or an
    /// infinity (`"Infinity"`, `"1e400"`).
    ///
    /// # Errors
    /// Returns [`OperandError`] describing why the text was rejected.
    pub fn parse(raw: &str) -> Result<Self, OperandError> {
        let input = raw.trim_start();
        if input.trim_end().is_empty() {
            return Err(OperandError::Empty);
        }

        let prefix = numeric_prefix(input);
        if prefix.is_empty() {
            let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
            return Err(if unsigned.starts_with("Infinity") {
                OperandError::NonFinite { input: input.to_string() }
            } else {
                OperandError::Malformed { input: input.to_string() }
            });
        }

        let value: f64 =
            prefix.parse().map_err(|_| OperandError::Malformed { input: input.to_string() })?;

        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(OperandError::NonFinite { input: input.to_string() })
        }
    }

    /// The wrapped value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// The longest leading `[+-]digits[.digits][(e|E)[+-]digits]` slice of `input`.
///
/// At least one mantissa digit is required; an exponent marker without digits
/// is left out of the prefix.
fn numeric_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &input[..end]
}

impl FromStr for Operand {
    type Err = OperandError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Machine-readable classification of a failed calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// One or both operands failed to parse.
    InvalidInput,
    /// The operation tag is not in the known set.
    InvalidOperation,
    /// The divisor was exactly zero.
    DivisionByZero,
}

impl ErrorCode {
    /// The serialized form of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidOperation => "INVALID_OPERATION",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
