//! Lock-Free Ring Buffer
//!
//! Fixed-capacity SPSC byte ring. The producer and consumer halves each own
//! their cursor; occupancy is derived from two monotonically increasing
//! totals, each written by exactly one side.

mod buffer;

pub use buffer::{Consumer, Producer, RingBuffer, DEFAULT_CAPACITY};

use thiserror::Error;

/// Ring buffer construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingBufferError {
    #[error("Ring buffer capacity must be non-zero")]
    ZeroCapacity,
}
