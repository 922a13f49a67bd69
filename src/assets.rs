//! Asset dimensions the game needs before anything is drawn

use serde::{Deserialize, Serialize};

/// Sizes of host-loaded sprites
pub trait AssetMetrics {
    /// Width and height of the retry button image
    fn retry_button_size(&self) -> (f32, f32);
}

/// Metrics known ahead of time (headless hosts, tests)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedMetrics {
    pub retry_width: f32,
    pub retry_height: f32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            retry_width: 64.0,
            retry_height: 32.0,
        }
    }
}

impl AssetMetrics for FixedMetrics {
    fn retry_button_size(&self) -> (f32, f32) {
        (self.retry_width, self.retry_height)
    }
}
