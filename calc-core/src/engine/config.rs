use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found while validating an [`EngineConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The error display must stay up for some time before recovering.
    #[error("recovery delay must be positive, got {0} ms")]
    InvalidRecoveryDelay(u64),
}

/// Tunable behaviour of the calculator engine.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use calc_core::EngineConfig;
///
/// let config = EngineConfig::default();
///
/// assert_eq!(config.recovery_delay(), Duration::from_millis(2000));
/// assert!(!config.dismiss_error_on_clear);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How long an error stays on the display before the engine resets.
    pub recovery_delay_ms: u64,

    /// Let clear and clear-all dismiss an error before the delay elapses.
    ///
    /// Off by default: while an error is shown every input is ignored.
    pub dismiss_error_on_clear: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recovery_delay_ms: 2000,
            dismiss_error_on_clear: false,
        }
    }
}

impl EngineConfig {
    pub fn recovery_delay(&self) -> Duration {
        Duration::from_millis(self.recovery_delay_ms)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRecoveryDelay`] for a zero delay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recovery_delay_ms == 0 {
            return Err(ConfigError::InvalidRecoveryDelay(self.recovery_delay_ms));
        }
        Ok(())
    }
}
