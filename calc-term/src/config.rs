//! Configuration file for the terminal calculator.
//!
//! ```toml
//! [engine]
//! recovery_delay_ms = 2000
//! dismiss_error_on_clear = false
//!
//! [display]
//! width = 24
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use calc_core::EngineConfig;
use calc_core::calculations::DISPLAY_BUDGET;
use serde::{Deserialize, Serialize};

/// Layout of the rendered frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Column the history and current value are right-aligned to.
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { width: 24 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TermConfig {
    pub engine: EngineConfig,
    pub display: DisplayConfig,
}

impl TermConfig {
    /// Reads the configuration at `path`, or the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Replaces values with the ones given on the command line.
    pub fn apply_overrides(
        &mut self,
        recovery_delay_ms: Option<u64>,
        dismiss_error_on_clear: bool,
        width: Option<usize>,
    ) {
        if let Some(delay) = recovery_delay_ms {
            self.engine.recovery_delay_ms = delay;
        }
        if dismiss_error_on_clear {
            self.engine.dismiss_error_on_clear = true;
        }
        if let Some(width) = width {
            self.display.width = width;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        ensure!(
            self.display.width >= DISPLAY_BUDGET,
            "display width must be at least {DISPLAY_BUDGET}, got {}",
            self.display.width
        );
        Ok(())
    }
}
