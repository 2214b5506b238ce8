//! Divide Calculator
//!
//! result = dividend / divisor
//!
//! Fails when the divisor compares equal to zero (so `-0.0` is rejected too).
//! Any other divisor uses plain IEEE division, which can overflow to an
//! infinity for very small divisors.

use abacus_types::Operation;

use crate::binary::BinaryCalculator;
use crate::error::{CalculationError, CalculationResult};

/// `a / b`, or [`CalculationError::DivisionByZero`] when `b == 0`.
pub fn divide(a: f64, b: f64) -> CalculationResult {
    if b == 0.0 {
        return Err(CalculationError::DivisionByZero);
    }
    Ok(a / b)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DivideCalculator;

impl BinaryCalculator for DivideCalculator {
    fn operation(&self) -> Operation {
        Operation::Divide
    }

    fn calculate(&self, a: f64, b: f64) -> CalculationResult {
        divide(a, b)
    }
}
