//! The stateful half of the calculator: the state machine, its display
//! boundary and the error recovery timer.

mod calculator;
mod config;
mod display;
mod recovery;

pub use calculator::Calculator;
pub use config::{ConfigError, EngineConfig};
pub use display::{DisplaySink, Frame, RecordingDisplay};
pub use recovery::RecoveryTimer;
