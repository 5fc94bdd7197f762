//! Translation of raw input events into calculator intents.
//!
//! Front-ends never call the state machine with raw keys or button
//! attributes. They build an [`InputEvent`], ask it for an [`Intent`], and
//! hand the intent to [`Calculator::apply`](crate::Calculator::apply).
//! Anything unrecognised maps to `None` and is simply dropped.

use serde::{Deserialize, Serialize};

use crate::models::{Digit, Operator};

/// What the user asked the calculator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    /// Delete the last character of the current operand.
    ClearEntry,
    /// Reset the whole calculation.
    ClearAll,
}

impl Intent {
    /// Maps a keyboard key name (`KeyboardEvent.key` style) to an intent.
    ///
    /// # Examples
    ///
    /// ```
    /// use calc_core::{Intent, Operator};
    ///
    /// assert_eq!(Intent::from_key("*"), Some(Intent::Operator(Operator::Multiply)));
    /// assert_eq!(Intent::from_key("Enter"), Some(Intent::Equals));
    /// assert_eq!(Intent::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Self::Decimal),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "*" => Some(Self::Operator(Operator::Multiply)),
            "/" => Some(Self::Operator(Operator::Divide)),
            "%" => Some(Self::Operator(Operator::Percent)),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::ClearAll),
            "Backspace" => Some(Self::ClearEntry),
            _ => single_digit(key).map(Self::Digit),
        }
    }

    /// Maps the value of a numeric button (`data-number` style attribute).
    pub fn from_number_target(value: &str) -> Option<Self> {
        single_digit(value).map(Self::Digit)
    }

    /// Maps the value of an action button (`data-action` style attribute).
    pub fn from_action_target(action: &str) -> Option<Self> {
        match action {
            "clear-all" => Some(Self::ClearAll),
            "clear" => Some(Self::ClearEntry),
            "decimal" => Some(Self::Decimal),
            "equals" => Some(Self::Equals),
            _ => Operator::parse(action).map(Self::Operator),
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Self::ClearEntry | Self::ClearAll)
    }
}

/// A raw event from one of the supported input sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent<'a> {
    /// A physical key, named the way browsers name `KeyboardEvent.key`.
    Key(&'a str),
    /// A pointer press on a digit button.
    NumberTarget(&'a str),
    /// A pointer press on an action button.
    ActionTarget(&'a str),
}

impl InputEvent<'_> {
    pub fn intent(&self) -> Option<Intent> {
        match self {
            Self::Key(key) => Intent::from_key(key),
            Self::NumberTarget(value) => Intent::from_number_target(value),
            Self::ActionTarget(action) => Intent::from_action_target(action),
        }
    }
}

fn single_digit(text: &str) -> Option<Digit> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::from_char(c),
        _ => None,
    }
}
