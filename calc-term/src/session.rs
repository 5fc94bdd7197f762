//! Drives a calculator from a stream of input lines.
//!
//! The session is the only place that knows about time: it measures how long
//! passed between events with the tokio clock and reports it to the engine,
//! and while an error is on display it sleeps until the engine's recovery
//! deadline so the reset happens even when no input arrives.

use anyhow::{Context, Result};
use calc_core::{Calculator, DisplaySink, InputEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

use crate::keys::split_keys;

/// Counters collected over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub lines: usize,
    pub intents: usize,
    pub ignored_keys: usize,
    pub recoveries: usize,
}

pub struct Session<D: DisplaySink> {
    calculator: Calculator<D>,
    wait_recovery: bool,
    stats: SessionStats,
    last_tick: Instant,
}

impl<D: DisplaySink> Session<D> {
    /// With `wait_recovery`, a session whose input ends while an error is
    /// displayed waits for the recovery before returning.
    pub fn new(
        calculator: Calculator<D>,
        wait_recovery: bool,
    ) -> Self {
        Self {
            calculator,
            wait_recovery,
            stats: SessionStats::default(),
            last_tick: Instant::now(),
        }
    }

    pub fn calculator(&self) -> &Calculator<D> {
        &self.calculator
    }

    pub fn into_calculator(self) -> Calculator<D> {
        self.calculator
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Applies every key on `line`, dropping keys that map to no intent.
    pub fn feed_line(
        &mut self,
        line: &str,
    ) {
        self.stats.lines += 1;
        for key in split_keys(line) {
            match InputEvent::Key(key).intent() {
                Some(intent) => {
                    self.stats.intents += 1;
                    self.calculator.apply(intent);
                }
                None => {
                    debug!(key, "ignoring unmapped key");
                    self.stats.ignored_keys += 1;
                }
            }
        }
    }

    /// Reads lines until end of input.
    ///
    /// # Errors
    ///
    /// Fails if reading from `reader` fails.
    pub async fn run<R>(
        &mut self,
        reader: R,
    ) -> Result<SessionStats>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        self.last_tick = Instant::now();

        loop {
            let remaining = self.calculator.recovery_remaining();
            tokio::select! {
                line = lines.next_line() => {
                    self.tick();
                    match line.context("Failed to read input")? {
                        Some(line) => self.feed_line(&line),
                        None => break,
                    }
                }
                _ = sleep(remaining.unwrap_or_default()), if remaining.is_some() => {
                    self.tick();
                }
            }
        }

        if self.wait_recovery {
            if let Some(remaining) = self.calculator.recovery_remaining() {
                debug!(?remaining, "input ended during error display; waiting for recovery");
                sleep(remaining).await;
                self.tick();
            }
        }

        info!(
            lines = self.stats.lines,
            intents = self.stats.intents,
            ignored = self.stats.ignored_keys,
            recoveries = self.stats.recoveries,
            "session finished"
        );
        Ok(self.stats)
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        if self.calculator.advance(elapsed) {
            self.stats.recoveries += 1;
        }
    }
}
