//! Encoder Service Implementation

use crate::{EncoderConfig, EncoderError};
use morse_table::{translate, Translation};
use ring_buffer::{Consumer, Producer, RingBuffer};
use tracing::{debug, info};

/// Lifecycle of the encoder service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// Constructed, never opened
    Idle,
    /// Opened by a client
    Open,
    /// Released by its client
    Closed,
}

/// Write path: translates input bytes into the ring
#[derive(Debug)]
pub struct MorseWriter {
    producer: Producer,
}

impl MorseWriter {
    /// Encode `input` into the ring.
    ///
    /// Unsupported bytes are skipped but still count as consumed. The call
    /// stops at the first character whose full sequence does not fit, and
    /// returns how many input bytes were consumed before it. Consuming
    /// nothing is reported as [`EncoderError::NoProgress`].
    pub fn write(&mut self, input: &[u8]) -> Result<usize, EncoderError> {
        let mut consumed = 0;

        for &byte in input {
            match translate(byte) {
                Translation::Unsupported(skipped) => {
                    debug!("Skipping unsupported character {:?}", skipped as char);
                }
                Translation::Code(code) => {
                    if self.producer.try_write(code) == 0 {
                        debug!(
                            "Buffer full: {} bytes free, {:?} needs {}",
                            self.producer.free(),
                            byte as char,
                            code.len()
                        );
                        break;
                    }
                }
            }
            consumed += 1;
        }

        if consumed == 0 {
            return Err(EncoderError::NoProgress {
                pending: input.len(),
            });
        }

        debug!("Encoded {} of {} input bytes", consumed, input.len());
        Ok(consumed)
    }
}

/// Read path: drains encoded symbol bytes and carries the lifecycle state
#[derive(Debug)]
pub struct MorseReader {
    consumer: Consumer,
    state: ServiceState,
}

impl MorseReader {
    /// Copy encoded bytes into `buf`, short at the ring's wrap point.
    /// Returns 0 when nothing is buffered.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = self.consumer.read(buf);
        if n > 0 {
            debug!("Read {} symbol bytes", n);
        }
        n
    }

    /// Symbol bytes available right now
    pub fn available(&self) -> usize {
        self.consumer.available()
    }

    /// Writer dropped and all of its output read
    pub fn is_drained(&self) -> bool {
        self.consumer.is_drained()
    }

    /// Acknowledge the client releasing the encoder
    pub fn release(&mut self) {
        info!("Morse encoder released");
        self.state = ServiceState::Closed;
    }

    /// Current lifecycle state
    pub fn state(&self) -> ServiceState {
        self.state
    }
}

/// Text to Morse encoder with a single ring shared by its two paths
#[derive(Debug)]
pub struct EncoderService {
    writer: MorseWriter,
    reader: MorseReader,
}

impl EncoderService {
    /// Create a new encoder service
    pub fn new(config: &EncoderConfig) -> Result<Self, EncoderError> {
        config.validate()?;
        let (producer, consumer) = RingBuffer::new(config.capacity)?.split();

        info!("Morse encoder ready (capacity {} bytes)", config.capacity);

        Ok(Self {
            writer: MorseWriter { producer },
            reader: MorseReader {
                consumer,
                state: ServiceState::Idle,
            },
        })
    }

    /// Acknowledge a client opening the encoder
    pub fn open(&mut self) {
        info!("Morse encoder opened");
        self.reader.state = ServiceState::Open;
    }

    /// See [`MorseReader::release`]
    pub fn release(&mut self) {
        self.reader.release();
    }

    /// Current lifecycle state
    pub fn state(&self) -> ServiceState {
        self.reader.state()
    }

    /// See [`MorseWriter::write`]
    pub fn write(&mut self, input: &[u8]) -> Result<usize, EncoderError> {
        self.writer.write(input)
    }

    /// See [`MorseReader::read`]
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        self.reader.read(buf)
    }

    /// Symbol bytes currently buffered
    pub fn occupancy(&self) -> usize {
        self.reader.available()
    }

    /// Separate the write and read paths so they can run on different tasks.
    /// The lifecycle state moves with the reader.
    pub fn into_split(self) -> (MorseWriter, MorseReader) {
        (self.writer, self.reader)
    }
}
