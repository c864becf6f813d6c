//! Lock-Free SPSC Ring Buffer Implementation

use crate::RingBufferError;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;

/// Default buffer capacity in bytes
pub const DEFAULT_CAPACITY: usize = 30;

/// Fixed-capacity byte ring shared by one producer and one consumer
pub struct RingBuffer {
    /// Pre-allocated storage
    storage: Box<[AtomicU8]>,
    /// Bytes ever admitted (wrapping), written only by the producer
    total_written: AtomicUsize,
    /// Bytes ever drained (wrapping), written only by the consumer
    total_read: AtomicUsize,
    /// Set once the producer is dropped
    closed: AtomicBool,
}

impl RingBuffer {
    /// Create a new ring buffer with given capacity
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::ZeroCapacity);
        }
        Ok(Self::allocate(capacity))
    }

    /// Create a buffer with the default capacity (30 bytes)
    pub fn with_default_capacity() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// `capacity` must be non-zero
    fn allocate(capacity: usize) -> Self {
        Self {
            storage: (0..capacity).map(|_| AtomicU8::new(0)).collect(),
            total_written: AtomicUsize::new(0),
            total_read: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
        }
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Split into the producer and consumer halves
    pub fn split(self) -> (Producer, Consumer) {
        let ring = Arc::new(self);
        (
            Producer {
                ring: Arc::clone(&ring),
                write_cursor: 0,
            },
            Consumer {
                ring,
                read_cursor: 0,
            },
        )
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("total_written", &self.total_written.load(Ordering::Relaxed))
            .field("total_read", &self.total_read.load(Ordering::Relaxed))
            .finish()
    }
}

/// Write half of a [`RingBuffer`]
#[derive(Debug)]
pub struct Producer {
    ring: Arc<RingBuffer>,
    write_cursor: usize,
}

impl Producer {
    /// Admit `bytes` in full, or nothing at all.
    ///
    /// Returns `bytes.len()` on success and `0` when the free space is
    /// smaller than the candidate (or the candidate is empty).
    pub fn try_write(&mut self, bytes: &[u8]) -> usize {
        let len = bytes.len();
        if len == 0 || len > self.free() {
            return 0;
        }

        let capacity = self.ring.capacity();
        for &byte in bytes {
            self.ring.storage[self.write_cursor].store(byte, Ordering::Relaxed);
            self.write_cursor = (self.write_cursor + 1) % capacity;
        }

        // Publishes the stores above to the consumer
        self.ring.total_written.fetch_add(len, Ordering::Release);
        len
    }

    /// Number of unread bytes, as seen by the producer
    pub fn len(&self) -> usize {
        let written = self.ring.total_written.load(Ordering::Relaxed);
        let read = self.ring.total_read.load(Ordering::Acquire);
        written.wrapping_sub(read)
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.free() == 0
    }

    /// Bytes that can be admitted right now
    pub fn free(&self) -> usize {
        self.ring.capacity() - self.len()
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}

impl Drop for Producer {
    fn drop(&mut self) {
        self.ring.closed.store(true, Ordering::Release);
    }
}

/// Read half of a [`RingBuffer`]
#[derive(Debug)]
pub struct Consumer {
    ring: Arc<RingBuffer>,
    read_cursor: usize,
}

impl Consumer {
    /// Drain up to `buf.len()` bytes into `buf`.
    ///
    /// Only the contiguous run before the end of storage is returned, so a
    /// read spanning the wrap point comes back short and the remainder needs
    /// a second call. Returns `0` when the buffer is empty.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let capacity = self.ring.capacity();
        let run = self
            .available()
            .min(capacity - self.read_cursor)
            .min(buf.len());
        if run == 0 {
            return 0;
        }

        let cells = &self.ring.storage[self.read_cursor..self.read_cursor + run];
        for (slot, cell) in buf.iter_mut().zip(cells) {
            *slot = cell.load(Ordering::Relaxed);
        }
        self.read_cursor = (self.read_cursor + run) % capacity;

        // Hands the drained cells back to the producer
        self.ring.total_read.fetch_add(run, Ordering::Release);
        run
    }

    /// Allocating variant of [`Consumer::read`]
    pub fn read_up_to(&mut self, max_count: usize) -> Vec<u8> {
        let mut buf = vec![0u8; max_count.min(self.ring.capacity())];
        let n = self.read(&mut buf);
        buf.truncate(n);
        buf
    }

    /// Number of unread bytes, as seen by the consumer
    pub fn available(&self) -> usize {
        let written = self.ring.total_written.load(Ordering::Acquire);
        let read = self.ring.total_read.load(Ordering::Relaxed);
        written.wrapping_sub(read)
    }

    /// Alias of [`Consumer::available`]
    pub fn len(&self) -> usize {
        self.available()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.available() == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.available() == self.ring.capacity()
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Whether the producer half has been dropped
    pub fn is_closed(&self) -> bool {
        self.ring.closed.load(Ordering::Acquire)
    }

    /// Producer gone and nothing left to read
    pub fn is_drained(&self) -> bool {
        // closed must be observed before the final total
        self.is_closed() && self.is_empty()
    }
}
