use abacus_types::Operation;

use crate::error::CalculationResult;

/// A trait for the built-in binary calculators.
/// Calculators are stateless and thread-safe.
pub trait BinaryCalculator: Send + Sync {
    /// The operation this calculator implements.
    fn operation(&self) -> Operation;

    /// The name of the calculator, identical to the operation tag.
    fn name(&self) -> &'static str {
        self.operation().as_str()
    }

    /// Performs the calculation.
    fn calculate(&self, a: f64, b: f64) -> CalculationResult;
}
