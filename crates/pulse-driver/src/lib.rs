//! Morse Pulse Driver
//!
//! Finds an LED under the Linux LED class registry and blinks it with
//! Morse timing: one unit per dot, three per dash and per character gap.

mod config;
mod discovery;
mod driver;
mod led;
mod timing;

pub use config::PulseConfig;
pub use discovery::{find_led, list_leds};
pub use driver::PulseDriver;
pub use led::{Indicator, SysfsLed};
pub use timing::{pulse_steps, PulseStep};

use std::path::PathBuf;
use thiserror::Error;

/// Hardware-side failures
#[derive(Debug, Error)]
pub enum PulseError {
    /// No registry entry contains the requested name
    #[error("No LED entry matching '{target}' under {}", .root.display())]
    LedNotFound { target: String, root: PathBuf },

    /// Reading or writing a control file failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The max brightness file held no value
    #[error("{}: empty max brightness value", .path.display())]
    EmptyMaxBrightness { path: PathBuf },
}

impl PulseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PulseError::Io {
            path: path.into(),
            source,
        }
    }
}
