//! Binary arithmetic for the sequential calculator.
//!
//! Every operation takes the pending left operand, the operand just entered
//! and the stored operator, and produces a result snapped to eight decimal
//! places. There is no precedence: the caller resolves operations one at a
//! time, left to right.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::snap_to_precision;
use crate::models::Operator;

/// Errors raised while resolving an operation.
///
/// The `Display` text is the diagnostic shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcError {
    /// The right operand of a division was zero.
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// The snapped result is not a finite number.
    #[error("Result too large")]
    Overflow,
}

/// Resolves `a op b`.
///
/// | operator   | result          |
/// |------------|-----------------|
/// | `Add`      | `a + b`         |
/// | `Subtract` | `a - b`         |
/// | `Multiply` | `a × b`         |
/// | `Divide`   | `a / b`         |
/// | `Percent`  | `a × (b / 100)` |
///
/// # Arguments
///
/// * `a` - The pending left operand
/// * `b` - The operand just entered
/// * `op` - The stored operator
///
/// # Returns
///
/// The result snapped to eight decimal places.
///
/// # Errors
///
/// - [`CalcError::DivideByZero`] when dividing by zero, before any
///   arithmetic happens.
/// - [`CalcError::Overflow`] when the snapped result is infinite or NaN.
///
/// # Examples
///
/// ```
/// use calc_core::Operator;
/// use calc_core::calculations::{CalcError, evaluate};
///
/// assert_eq!(evaluate(0.1, 0.2, Operator::Add), Ok(0.3));
/// assert_eq!(evaluate(50.0, 10.0, Operator::Percent), Ok(5.0));
/// assert_eq!(evaluate(9.0, 0.0, Operator::Divide), Err(CalcError::DivideByZero));
/// ```
pub fn evaluate(
    a: f64,
    b: f64,
    op: Operator,
) -> Result<f64, CalcError> {
    let raw = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            a / b
        }
        Operator::Percent => a * (b / 100.0),
    };

    let result = snap_to_precision(raw);
    if !result.is_finite() {
        return Err(CalcError::Overflow);
    }

    Ok(result)
}
