//! Encoder configuration

use crate::EncoderError;
use morse_table::MAX_CODE_LEN;
use ring_buffer::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Encoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Ring capacity in Morse symbol bytes
    pub capacity: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl EncoderConfig {
    /// Reject capacities that could never admit the longest character
    pub fn validate(&self) -> Result<(), EncoderError> {
        if self.capacity < MAX_CODE_LEN {
            return Err(EncoderError::CapacityTooSmall {
                capacity: self.capacity,
                required: MAX_CODE_LEN,
            });
        }
        Ok(())
    }
}
