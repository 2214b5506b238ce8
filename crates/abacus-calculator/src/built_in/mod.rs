//! Built-in calculators provided by the Abacus engine.

use abacus_types::Operation;

use crate::binary::BinaryCalculator;

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

/// Maps an operation to its built-in calculator.
pub fn calculator_for(operation: Operation) -> &'static dyn BinaryCalculator {
    match operation {
        Operation::Add => &add::AddCalculator,
        Operation::Subtract => &subtract::SubtractCalculator,
        Operation::Multiply => &multiply::MultiplyCalculator,
        Operation::Divide => &divide::DivideCalculator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operation_has_a_matching_calculator() {
        for op in Operation::ALL {
            let calculator = calculator_for(op);
            assert_eq!(calculator.operation(), op);
            assert_eq!(calculator.name(), op.as_str());
        }
    }
}
