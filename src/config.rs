use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::smoothing::DEFAULT_WINDOW;

/// Default eraser radius in pixels.
pub const DEFAULT_ERASE_RADIUS: i32 = 25;

/// Errors raised when an engine configuration fails validation or parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("smoothing window must hold at least 1 sample, got {0}")]
    WindowTooSmall(usize),
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Raw pointer samples averaged per frame.
    pub smoothing_window: usize,
    /// Eraser radius in pixels. Zero or negative disables erasing.
    pub erase_radius: i32,
    /// Consecutive frames a changed pointing value must hold before the
    /// stroke machine acts on it. Zero acts immediately, which means a
    /// single noisy frame can start or end a stroke; the smoother damps
    /// position only, not the gesture boolean.
    pub debounce_frames: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_WINDOW,
            erase_radius: DEFAULT_ERASE_RADIUS,
            debounce_frames: 0,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smoothing_window == 0 {
            return Err(ConfigError::WindowTooSmall(self.smoothing_window));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
