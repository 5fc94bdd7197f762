//! The single mutable record behind a calculator session.

use serde::{Deserialize, Serialize};

use super::Operator;
use crate::calculations::CalcError;

/// Placeholder operand shown before anything is entered.
pub const PLACEHOLDER: &str = "0";

/// Marker shown in place of the current value while an error is displayed.
pub const ERROR_MARKER: &str = "Error";

/// Calculation state for one calculator session.
///
/// `Default` is the initial state and also the state every clear-all and
/// error recovery returns to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text of the operand being edited, or of the last computed result.
    pub current_input: String,

    /// Left-hand operand of the pending operation.
    pub previous_input: Option<f64>,

    /// Pending operator. Never set without `previous_input`.
    pub operator: Option<Operator>,

    /// Set after an operator or equals; the next digit starts a new operand.
    pub awaiting_operand: bool,

    /// Last completed calculation (`"A op B = R"`) or the error diagnostic.
    pub history: String,

    /// Failure currently on display, if any.
    pub error: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: PLACEHOLDER.to_string(),
            previous_input: None,
            operator: None,
            awaiting_operand: false,
            history: String::new(),
            error: None,
        }
    }
}

impl CalculatorState {
    pub fn has_decimal_point(&self) -> bool {
        self.current_input.contains('.')
    }

    pub fn is_placeholder(&self) -> bool {
        self.current_input == PLACEHOLDER
    }

    pub fn has_pending_operation(&self) -> bool {
        self.previous_input.is_some() && self.operator.is_some()
    }

    /// Replaces the operand text with a computed value.
    pub fn set_result(
        &mut self,
        value: f64,
    ) {
        // f64's Display never switches to exponent form, so the text stays
        // a plain decimal that can be edited and parsed back.
        self.current_input = value.to_string();
    }
}
