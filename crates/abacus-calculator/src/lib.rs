#![deny(warnings)]
//! The arithmetic engine for Abacus.
//!
//! This crate provides the four binary operations, the [`evaluate`] dispatch
//! entry point that turns raw text input into a [`CalculationResult`], and the
//! rendering helpers front ends use to display it. The engine holds no state:
//! every call depends only on its arguments.

pub mod binary;
pub mod built_in;
pub mod calculator;
pub mod error;
pub mod render;

pub use abacus_types::{ErrorCode, Operand, OperandError, Operation};
pub use binary::BinaryCalculator;
pub use built_in::{
    add::add, calculator_for, divide::divide, multiply::multiply, subtract::subtract,
};
pub use calculator::{Calculator, calculate, evaluate};
pub use error::{CalculationError, CalculationResult, OperandPosition};
pub use render::{format_number, format_result, render_outcome, to_response};
