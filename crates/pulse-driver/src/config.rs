//! Pulse driver configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Pulse driver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Base time unit (one dot) in milliseconds
    pub unit_ms: u64,
    /// LED class registry directory
    pub leds_dir: PathBuf,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            unit_ms: 300,
            leds_dir: PathBuf::from("/sys/class/leds"),
        }
    }
}

impl PulseConfig {
    /// Base time unit
    pub fn unit(&self) -> Duration {
        Duration::from_millis(self.unit_ms)
    }
}
