//! Sequential calculator state machine.
//!
//! Operations resolve strictly left to right as operators arrive: entering
//! `5 + 3 +` resolves `5 + 3` immediately, before the second operand is
//! known. Equals resolves whatever operation is pending and leaves the
//! result on the display as the start of the next calculation.
//!
//! # Error display
//!
//! When the evaluator fails, the display switches to [`ERROR_MARKER`] with
//! the diagnostic in the history line, and a [`RecoveryTimer`] is armed.
//! Until it fires every intent is ignored (unless
//! [`EngineConfig::dismiss_error_on_clear`] lets a clear through). When it
//! fires the engine performs a full clear.
//!
//! # Example
//!
//! ```
//! use calc_core::{Calculator, Digit, Operator, RecordingDisplay};
//!
//! let mut calc = Calculator::new(RecordingDisplay::new());
//! calc.digit(Digit::new(5).unwrap());
//! calc.operator(Operator::Add);
//! calc.digit(Digit::new(3).unwrap());
//! calc.equals();
//!
//! assert_eq!(calc.current_text(), "8");
//! assert_eq!(calc.history(), "5 + 3 = 8");
//! ```

use std::time::Duration;

use tracing::{debug, info, warn};

use super::{ConfigError, DisplaySink, EngineConfig, RecoveryTimer};
use crate::calculations::{CalcError, evaluate, format_display, format_number, parse_number};
use crate::input::Intent;
use crate::models::{CalculatorState, Digit, ERROR_MARKER, Operator, PLACEHOLDER};

/// A calculator session writing its output to `D`.
#[derive(Debug)]
pub struct Calculator<D: DisplaySink> {
    state: CalculatorState,
    config: EngineConfig,
    recovery: RecoveryTimer,
    display: D,
}

impl<D: DisplaySink> Calculator<D> {
    /// Creates a calculator with the default configuration and renders the
    /// initial frame.
    pub fn new(display: D) -> Self {
        Self::build(EngineConfig::default(), display)
    }

    /// Creates a calculator with `config` and renders the initial frame.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration does not validate.
    pub fn with_config(
        config: EngineConfig,
        display: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, display))
    }

    fn build(
        config: EngineConfig,
        display: D,
    ) -> Self {
        let mut calculator = Self {
            state: CalculatorState::default(),
            config,
            recovery: RecoveryTimer::new(),
            display,
        };
        calculator.render();
        calculator
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    pub fn history(&self) -> &str {
        &self.state.history
    }

    pub fn is_showing_error(&self) -> bool {
        self.state.error.is_some()
    }

    /// Time left before an error on display is cleared.
    pub fn recovery_remaining(&self) -> Option<Duration> {
        self.recovery.remaining()
    }

    /// Text of the current-value display.
    pub fn current_text(&self) -> String {
        if self.state.error.is_some() {
            return ERROR_MARKER.to_string();
        }
        if self.state.is_placeholder() {
            return PLACEHOLDER.to_string();
        }
        match parse_number(&self.state.current_input) {
            Some(value) => format_display(value),
            None => self.state.current_input.clone(),
        }
    }

    // ─── inbound ─────────────────────────────────────────────────────────────

    pub fn digit(
        &mut self,
        digit: Digit,
    ) {
        self.apply(Intent::Digit(digit));
    }

    pub fn decimal(&mut self) {
        self.apply(Intent::Decimal);
    }

    pub fn operator(
        &mut self,
        next: Operator,
    ) {
        self.apply(Intent::Operator(next));
    }

    pub fn equals(&mut self) {
        self.apply(Intent::Equals);
    }

    pub fn clear_entry(&mut self) {
        self.apply(Intent::ClearEntry);
    }

    pub fn clear_all(&mut self) {
        self.apply(Intent::ClearAll);
    }

    /// Applies one intent and renders the result.
    pub fn apply(
        &mut self,
        intent: Intent,
    ) {
        if let Some(error) = self.state.error {
            if self.config.dismiss_error_on_clear && intent.is_clear() {
                info!(%error, "error dismissed");
                self.reset();
                self.render();
            } else {
                debug!(?intent, %error, "input ignored while error is displayed");
            }
            return;
        }

        debug!(?intent, "applying intent");
        let changed = match intent {
            Intent::Digit(digit) => self.on_digit(digit),
            Intent::Decimal => self.on_decimal(),
            Intent::Operator(next) => self.on_operator(next),
            Intent::Equals => self.on_equals(),
            Intent::ClearEntry => self.on_clear_entry(),
            Intent::ClearAll => self.on_clear_all(),
        };
        if changed {
            self.render();
        }
    }

    /// Reports that `elapsed` time has passed. Returns `true` if an error on
    /// display was cleared as a result.
    pub fn advance(
        &mut self,
        elapsed: Duration,
    ) -> bool {
        if !self.recovery.advance(elapsed) {
            return false;
        }
        info!("recovering from error display");
        self.reset();
        self.render();
        true
    }

    // ─── transitions ─────────────────────────────────────────────────────────
    //
    // Each handler returns whether the display needs a fresh frame. Failures
    // render through `fail` and return false.

    fn on_digit(
        &mut self,
        digit: Digit,
    ) -> bool {
        let c = digit.as_char();
        if self.state.awaiting_operand {
            self.state.current_input = c.to_string();
            self.state.awaiting_operand = false;
        } else if self.state.is_placeholder() {
            self.state.current_input = c.to_string();
        } else {
            self.state.current_input.push(c);
        }
        true
    }

    fn on_decimal(&mut self) -> bool {
        if self.state.awaiting_operand {
            self.state.current_input = "0.".to_string();
            self.state.awaiting_operand = false;
        } else if !self.state.has_decimal_point() {
            self.state.current_input.push('.');
        }
        true
    }

    fn on_clear_entry(&mut self) -> bool {
        if !self.state.is_placeholder() {
            self.state.current_input.pop();
            let rest = self.state.current_input.as_str();
            if rest.is_empty() || rest == "-" {
                self.state.current_input = PLACEHOLDER.to_string();
            }
        }
        true
    }

    fn on_clear_all(&mut self) -> bool {
        self.reset();
        true
    }

    fn on_operator(
        &mut self,
        next: Operator,
    ) -> bool {
        let value = self.current_value();

        match (self.state.previous_input, self.state.operator) {
            (None, _) => self.state.previous_input = Some(value),
            (Some(left), Some(pending)) => match self.resolve(left, pending, value) {
                Ok(result) => self.state.previous_input = Some(result),
                Err(error) => {
                    self.fail(error);
                    return false;
                }
            },
            // An operand without an operator never survives a transition.
            (Some(_), None) => {}
        }

        self.state.operator = Some(next);
        self.state.awaiting_operand = true;
        self.display.set_active_operator(Some(next));
        true
    }

    fn on_equals(&mut self) -> bool {
        let (Some(left), Some(pending)) = (self.state.previous_input, self.state.operator) else {
            debug!("equals without a pending operation");
            return false;
        };

        let value = self.current_value();
        if let Err(error) = self.resolve(left, pending, value) {
            self.fail(error);
            return false;
        }

        self.state.previous_input = None;
        self.state.operator = None;
        self.state.awaiting_operand = true;
        self.display.set_active_operator(None);
        true
    }

    /// Evaluates `left pending right`, writing the result and history on
    /// success. Leaves the state untouched on failure.
    fn resolve(
        &mut self,
        left: f64,
        pending: Operator,
        right: f64,
    ) -> Result<f64, CalcError> {
        let result = evaluate(left, right, pending)?;

        self.state.set_result(result);
        self.state.history = format!(
            "{} {} {} = {}",
            format_number(left),
            pending.symbol(),
            format_number(right),
            format_number(result),
        );
        debug!(left, right, result, operator = pending.as_str(), "operation resolved");
        Ok(result)
    }

    fn fail(
        &mut self,
        error: CalcError,
    ) {
        warn!(%error, "calculation failed");
        self.state.error = Some(error);
        self.state.history = error.to_string();
        self.render();
        if self.recovery.arm(self.config.recovery_delay()) {
            debug!("replaced pending recovery");
        }
    }

    fn reset(&mut self) {
        self.state = CalculatorState::default();
        self.recovery.cancel();
        self.display.set_active_operator(None);
    }

    fn current_value(&self) -> f64 {
        parse_number(&self.state.current_input).unwrap_or_else(|| {
            warn!(input = %self.state.current_input, "operand text did not parse; using zero");
            0.0
        })
    }

    fn render(&mut self) {
        let current = self.current_text();
        self.display.render(&current, &self.state.history);
    }
}
