use abacus_types::{Operand, Operation};
use tracing::debug;

use crate::built_in::calculator_for;
use crate::error::{CalculationError, CalculationResult, OperandPosition};

/// Parses both raw operands, first then second.
fn parse_operands(raw_a: &str, raw_b: &str) -> Result<(Operand, Operand), CalculationError> {
    let a = Operand::parse(raw_a)
        .map_err(|e| CalculationError::invalid_input(OperandPosition::First, e))?;
    let b = Operand::parse(raw_b)
        .map_err(|e| CalculationError::invalid_input(OperandPosition::Second, e))?;
    Ok((a, b))
}

/// Applies `operation` to two already validated operands.
pub fn calculate(a: Operand, b: Operand, operation: Operation) -> CalculationResult {
    calculator_for(operation).calculate(a.value(), b.value())
}

/// Validates raw text input and dispatches to the matching operation.
///
/// Operands are checked before the operation tag, so `("abc", "4", "modulo")`
/// reports invalid input rather than an invalid operation.
pub fn evaluate(raw_a: &str, raw_b: &str, operation: &str) -> CalculationResult {
    debug!(raw_a, raw_b, operation, "Evaluating calculation");

    let result = parse_operands(raw_a, raw_b).and_then(|(a, b)| {
        let operation = operation
            .parse::<Operation>()
            .map_err(|e| CalculationError::InvalidOperation { tag: e.tag })?;
        calculate(a, b, operation)
    });

    match &result {
        Ok(value) => debug!(operation, value, "Calculation succeeded"),
        Err(err) => debug!(operation, category = err.category(), error = %err, "Calculation rejected"),
    }
    result
}

/// Stateless engine handle for callers that prefer a value over free functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// See [`evaluate`].
    pub fn evaluate(&self, raw_a: &str, raw_b: &str, operation: &str) -> CalculationResult {
        evaluate(raw_a, raw_b, operation)
    }

    /// See [`calculate`].
    pub fn calculate(&self, a: Operand, b: Operand, operation: Operation) -> CalculationResult {
        calculate(a, b, operation)
    }

    /// The operations this engine supports, in declaration order.
    pub fn operations(&self) -> &'static [Operation] {
        &Operation::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_types::OperandError;

    #[test]
    fn evaluates_each_operation() {
        assert_eq!(evaluate("3", "4", "add"), Ok(7.0));
        assert_eq!(evaluate("3", "4", "subtract"), Ok(-1.0));
        assert_eq!(evaluate("3", "4", "multiply"), Ok(12.0));
        assert_eq!(evaluate("3", "4", "divide"), Ok(0.75));
    }

    #[test]
    fn first_bad_operand_is_reported() {
        let err = evaluate("abc", "xyz", "add").unwrap_err();
        assert_eq!(
            err,
            CalculationError::InvalidInput {
                position: OperandPosition::First,
                source: OperandError::Malformed { input: "abc".to_string() },
            }
        );

        let err = evaluate("1", "", "add").unwrap_err();
        assert_eq!(
            err,
            CalculationError::InvalidInput {
                position: OperandPosition::Second,
                source: OperandError::Empty,
            }
        );
    }

    #[test]
    fn input_is_checked_before_operation() {
        let err = evaluate("abc", "4", "modulo").unwrap_err();
        assert_eq!(err.to_string(), "Please enter valid numbers.");
    }

    #[test]
    fn unknown_tag_keeps_the_tag() {
        let err = evaluate("3", "4", "modulo").unwrap_err();
        assert_eq!(err, CalculationError::InvalidOperation { tag: "modulo".to_string() });
    }

    #[test]
    fn typed_calculate_skips_parsing() {
        let a = Operand::new(10.0).unwrap();
        let b = Operand::new(0.0).unwrap();
        assert_eq!(calculate(a, b, Operation::Divide), Err(CalculationError::DivisionByZero));
        assert_eq!(calculate(a, b, Operation::Subtract), Ok(10.0));
    }

    #[test]
    fn facade_lists_all_operations() {
        let calculator = Calculator::new();
        assert_eq!(calculator.operations().len(), 4);
        assert_eq!(calculator.evaluate("2", "5", "multiply"), Ok(10.0));
    }
}
