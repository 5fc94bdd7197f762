//! Engine for a sequential four-function calculator.
//!
//! Input arrives as [`Intent`]s, the [`Calculator`] state machine applies
//! them, the evaluator and formatter in [`calculations`] do the arithmetic
//! and text, and every change is pushed to a [`DisplaySink`].

pub mod calculations;
pub mod engine;
pub mod input;
pub mod models;

pub use calculations::CalcError;
pub use engine::{
    Calculator, ConfigError, DisplaySink, EngineConfig, Frame, RecordingDisplay, RecoveryTimer,
};
pub use input::{InputEvent, Intent};
pub use models::*;
