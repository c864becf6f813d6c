//! LED output

use crate::PulseError;
use std::path::{Path, PathBuf};
use tracing::info;

const OFF: &str = "0";

/// A binary output the driver can switch
pub trait Indicator {
    fn set(&mut self, on: bool) -> Result<(), PulseError>;
}

/// LED class device controlled through its `brightness` file
#[derive(Debug, Clone)]
pub struct SysfsLed {
    brightness_path: PathBuf,
    on_value: String,
}

impl SysfsLed {
    /// Open the LED at `dir`, reading `max_brightness` once as the "on" value
    pub fn open(dir: &Path) -> Result<Self, PulseError> {
        let max_path = dir.join("max_brightness");
        let raw = std::fs::read_to_string(&max_path).map_err(|e| PulseError::io(&max_path, e))?;

        let on_value = raw.trim().to_string();
        if on_value.is_empty() {
            return Err(PulseError::EmptyMaxBrightness { path: max_path });
        }

        let brightness_path = dir.join("brightness");
        info!(
            "LED {} (on = {})",
            brightness_path.display(),
            on_value
        );

        Ok(Self {
            brightness_path,
            on_value,
        })
    }

    /// Value written to switch the LED on
    pub fn on_value(&self) -> &str {
        &self.on_value
    }

    /// Control file being written
    pub fn brightness_path(&self) -> &Path {
        &self.brightness_path
    }
}

impl Indicator for SysfsLed {
    fn set(&mut self, on: bool) -> Result<(), PulseError> {
        let value = if on { self.on_value.as_str() } else { OFF };
        std::fs::write(&self.brightness_path, value)
            .map_err(|e| PulseError::io(&self.brightness_path, e))
    }
}
