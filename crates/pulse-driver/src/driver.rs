//! Pulse Driver Implementation

use crate::led::Indicator;
use crate::timing::pulse_steps;
use crate::PulseError;
use std::time::Duration;
use tracing::{debug, info};

/// Plays Morse stream bytes on an [`Indicator`]
pub struct PulseDriver<I> {
    indicator: I,
    /// Length of one dot
    unit: Duration,
}

impl<I: Indicator> PulseDriver<I> {
    /// Create a new driver
    pub fn new(indicator: I, unit: Duration) -> Self {
        Self { indicator, unit }
    }

    /// Play one stream byte, sleeping through its steps. Every step is
    /// written, so the output is forced off before each symbol even if
    /// something else lit it in between.
    pub async fn play(&mut self, byte: u8) -> Result<(), PulseError> {
        for step in pulse_steps(byte) {
            self.indicator.set(step.on)?;
            tokio::time::sleep(self.unit * step.units).await;
        }
        Ok(())
    }

    /// Play a run of stream bytes in order
    pub async fn play_all(&mut self, bytes: &[u8]) -> Result<(), PulseError> {
        debug!("Playing {} symbol bytes", bytes.len());
        for &byte in bytes {
            self.play(byte).await?;
        }
        Ok(())
    }

    /// Force the output off
    pub fn shutdown(&mut self) -> Result<(), PulseError> {
        info!("Switching LED off");
        self.indicator.set(false)
    }

    /// Borrow the underlying output
    pub fn indicator(&self) -> &I {
        &self.indicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    const UNIT: Duration = Duration::from_millis(300);

    /// Records every level write
    #[derive(Default)]
    struct Recorder {
        levels: Vec<bool>,
        fail: bool,
    }

    impl Indicator for Recorder {
        fn set(&mut self, on: bool) -> Result<(), PulseError> {
            if self.fail {
                return Err(PulseError::io(
                    "/sys/class/leds/test/brightness",
                    std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                ));
            }
            self.levels.push(on);
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dot_timing() {
        let mut driver = PulseDriver::new(Recorder::default(), UNIT);
        let start = Instant::now();
        driver.play(b'.').await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(600));
        assert_eq!(driver.indicator().levels, vec![false, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dash_timing() {
        let mut driver = PulseDriver::new(Recorder::default(), UNIT);
        let start = Instant::now();
        driver.play(b'-').await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(1200));
        assert_eq!(driver.indicator().levels, vec![false, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gap_stays_dark() {
        let mut driver = PulseDriver::new(Recorder::default(), UNIT);
        let start = Instant::now();
        driver.play(b' ').await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(1200));
        assert_eq!(driver.indicator().levels, vec![false, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_letter_sequence() {
        let mut driver = PulseDriver::new(Recorder::default(), UNIT);
        let start = Instant::now();
        driver.play_all(b".- ").await.unwrap();

        // 2 + 4 + 4 units
        assert_eq!(start.elapsed(), UNIT * 10);
        assert_eq!(
            driver.indicator().levels,
            vec![false, true, false, true, false, false]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_off_written_before_every_symbol() {
        let mut driver = PulseDriver::new(Recorder::default(), UNIT);
        driver.play_all(b"  ").await.unwrap();

        // Two gaps: each one writes its leading off and its held off
        assert_eq!(driver.indicator().levels, vec![false; 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_foreign_byte_is_one_dark_unit() {
        let mut driver = PulseDriver::new(Recorder::default(), UNIT);
        let start = Instant::now();
        driver.play(b'\n').await.unwrap();

        assert_eq!(start.elapsed(), UNIT);
        assert_eq!(driver.indicator().levels, vec![false]);
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let recorder = Recorder {
            fail: true,
            ..Default::default()
        };
        let mut driver = PulseDriver::new(recorder, Duration::ZERO);
        let err = driver.play(b'.').await.unwrap_err();
        assert!(matches!(err, PulseError::Io { .. }));
    }

    #[test]
    fn test_shutdown_always_writes_off() {
        let mut driver = PulseDriver::new(Recorder::default(), UNIT);
        driver.shutdown().unwrap();
        driver.shutdown().unwrap();
        assert_eq!(driver.indicator().levels, vec![false, false]);
    }
}
