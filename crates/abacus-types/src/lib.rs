//! Abacus Types
//!
//! This crate defines the core types shared across the Abacus workspace
//! (currently `abacus-calculator` and `abacus-api`). It keeps the data model
//! (operands, operation tags, error codes and wire payloads) in one place so the
//! engine and the HTTP surface agree on it without depending on each other.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]

mod payload;
mod types;

pub use payload::{CalculationRequest, CalculationResponse};
pub use types::{ErrorCode, Operand, OperandError, Operation, UnknownOperation};
