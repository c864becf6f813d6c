//! Morse Encoder Service
//!
//! Translates input bytes to Morse symbols on the write path and drains the
//! encoded stream on the read path, with a fixed-capacity ring in between.

mod config;
mod service;

pub use config::EncoderConfig;
pub use service::{EncoderService, MorseReader, MorseWriter, ServiceState};

use ring_buffer::RingBufferError;
use thiserror::Error;

/// Errors from the encoder service
#[derive(Debug, Error)]
pub enum EncoderError {
    /// Nothing from the input could be consumed
    #[error("No input consumed: no room for the next character ({pending} input bytes pending)")]
    NoProgress { pending: usize },

    /// Configured capacity cannot hold even one character
    #[error("Encoder capacity {capacity} is smaller than the longest Morse sequence ({required} bytes)")]
    CapacityTooSmall { capacity: usize, required: usize },

    #[error("Ring buffer error: {0}")]
    RingBuffer(#[from] RingBufferError),
}
