//! Calculator for multiplying two numeric values

use abacus_types::Operation;

use crate::binary::BinaryCalculator;
use crate::error::CalculationResult;

/// `a * b`. Total over finite inputs; the product may overflow to an infinity.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Calculator for multiplication operations
///
/// # Arguments
/// * `a` - First value to multiply
/// * `b` - Second value to multiply
#[derive(Debug, Default, Clone, Copy)]
pub struct MultiplyCalculator;

impl BinaryCalculator for MultiplyCalculator {
    fn operation(&self) -> Operation {
        Operation::Multiply
    }

    fn calculate(&self, a: f64, b: f64) -> CalculationResult {
        Ok(multiply(a, b))
    }
}
