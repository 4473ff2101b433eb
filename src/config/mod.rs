use crate::utils::error::{CaptureError, Result};
use std::str::FromStr;
use tracing::Level;

pub const LEVEL_ENV_VAR: &str = "TRACECAP_LEVEL";

/// Capture settings applied when the layer is built. Targets can still
/// override the level individually afterwards.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub default_level: Level,
    /// Cap on buffered events per (target, level) list; oldest events are
    /// dropped first once the cap is reached. `None` means unbounded.
    pub max_buffered: Option<usize>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            default_level: Level::INFO,
            max_buffered: None,
        }
    }
}

impl CaptureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Caps buffered events per (target, level) list, dropping oldest first.
    /// A zero cap is treated as 1 so the latest event stays queryable.
    pub fn max_buffered(mut self, cap: usize) -> Self {
        self.max_buffered = Some(cap.max(1));
        self
    }

    /// Builds a config seeded from `TRACECAP_LEVEL` when the variable is set,
    /// falling back to the defaults when it isn't.
    pub fn from_env() -> Result<Self> {
        match std::env::var(LEVEL_ENV_VAR) {
            Ok(value) => {
                let level = Level::from_str(&value).map_err(|e| {
                    CaptureError::InvalidConfigValueError {
                        field: LEVEL_ENV_VAR.to_string(),
                        value,
                        reason: format!("Not a level name: {}", e),
                    }
                })?;
                Ok(Self::default().default_level(level))
            }
            Err(_) => Ok(Self::default()),
        }
    }
}
