//! Pure arithmetic and formatting for the calculator engine.
//!
//! Nothing in here holds state: the evaluator maps two operands and an
//! operator to a snapped result, and the formatter maps a value to the text
//! shown on the display.

pub mod common;
pub mod evaluator;
pub mod formatter;

pub use evaluator::{CalcError, evaluate};
pub use formatter::{
    DISPLAY_BUDGET, format_display, format_number, parse_number, to_decimal, to_exponential,
};
