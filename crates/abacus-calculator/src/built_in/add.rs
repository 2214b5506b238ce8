//! Add Calculator

use abacus_types::Operation;

use crate::binary::BinaryCalculator;
use crate::error::CalculationResult;

/// `a + b`. Total over finite inputs.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AddCalculator;

impl BinaryCalculator for AddCalculator {
    fn operation(&self) -> Operation {
        Operation::Add
    }

    fn calculate(&self, a: f64, b: f64) -> CalculationResult {
        Ok(add(a, b))
    }
}
