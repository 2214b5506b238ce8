//! Display helpers shared by every front end.
//!
//! Numbers are printed the way a browser prints them: no trailing `.0` on
//! integral values, exponent form outside `[1e-6, 1e21)`, `Infinity` for
//! overflowed results.

use abacus_types::CalculationResponse;

use crate::error::CalculationResult;

const RESULT_LABEL: &str = "Result: ";

/// Formats a number for display.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

/// `Result: <value>`.
pub fn format_result(value: f64) -> String {
    format!("{RESULT_LABEL}{}", format_number(value))
}

/// The text to show for an outcome: the formatted result, or the error message verbatim.
pub fn render_outcome(outcome: &CalculationResult) -> String {
    match outcome {
        Ok(value) => format_result(*value),
        Err(err) => err.to_string(),
    }
}

/// Converts an outcome into its wire representation.
pub fn to_response(outcome: &CalculationResult) -> CalculationResponse {
    match outcome {
        Ok(value) => CalculationResponse::Success { value: *value, display: format_result(*value) },
        Err(err) => {
            let message = err.to_string();
            CalculationResponse::Failure { code: err.code(), display: message.clone(), message }
        }
    }
}
