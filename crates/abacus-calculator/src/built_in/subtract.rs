//! Subtract Calculator

use abacus_types::Operation;

use crate::binary::BinaryCalculator;
use crate::error::CalculationResult;

/// `a - b`. Total over finite inputs.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SubtractCalculator;

impl BinaryCalculator for SubtractCalculator {
    fn operation(&self) -> Operation {
        Operation::Subtract
    }

    fn calculate(&self, a: f64, b: f64) -> CalculationResult {
        Ok(subtract(a, b))
    }
}
