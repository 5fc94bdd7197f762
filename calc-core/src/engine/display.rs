//! Boundary between the engine and whatever shows its output.

use crate::models::Operator;

/// Receives everything the engine wants to show.
///
/// Implementations only present; they never feed anything back into the
/// engine.
pub trait DisplaySink {
    /// Called after every state change with the current-value text and the
    /// history line.
    fn render(
        &mut self,
        current: &str,
        history: &str,
    );

    /// Called whenever the pending operator changes, so the matching control
    /// can be highlighted.
    fn set_active_operator(
        &mut self,
        operator: Option<Operator>,
    );
}

/// One rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub current: String,
    pub history: String,
}

/// A [`DisplaySink`] that keeps every frame and indicator change in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDisplay {
    frames: Vec<Frame>,
    indicators: Vec<Option<Operator>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Every indicator change, oldest first.
    pub fn indicators(&self) -> &[Option<Operator>] {
        &self.indicators
    }

    /// The operator currently highlighted.
    pub fn active_operator(&self) -> Option<Operator> {
        self.indicators.last().copied().flatten()
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(
        &mut self,
        current: &str,
        history: &str,
    ) {
        self.frames.push(Frame {
            current: current.to_string(),
            history: history.to_string(),
        });
    }

    fn set_active_operator(
        &mut self,
        operator: Option<Operator>,
    ) {
        self.indicators.push(operator);
    }
}
