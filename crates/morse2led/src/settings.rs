//! Layered application configuration

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use morse_encoder::EncoderConfig;
use pulse_driver::PulseConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable prefix, e.g. `MORSE2LED__PULSE__UNIT_MS=100`
pub const ENV_PREFIX: &str = "MORSE2LED";

/// Names an alternative config file (without extension)
pub const CONFIG_PATH_VAR: &str = "MORSE2LED_CONFIG";

const DEFAULT_CONFIG_NAME: &str = "morse2led";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Stdin to encoder to output plumbing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Backoff between polls of a full or empty encoder (milliseconds)
    pub poll_interval_ms: u64,
    /// Bytes read from input per chunk
    pub chunk_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50,
            chunk_size: 64,
        }
    }
}

impl PipelineConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Max tracing level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    pub encoder: EncoderConfig,
    pub pulse: PulseConfig,
    pub pipeline: PipelineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            encoder: EncoderConfig::default(),
            pulse: PulseConfig::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `morse2led.*` (or `$MORSE2LED_CONFIG`), then environment
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_NAME.to_string());
        Self::from_builder(Config::builder().add_source(File::with_name(&path).required(false)))
    }

    pub(crate) fn from_builder(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: AppConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.encoder
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        if self.pipeline.chunk_size == 0 {
            return Err(ConfigError::Message(
                "pipeline.chunk_size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::path::PathBuf;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.encoder.capacity, 30);
        assert_eq!(config.pulse.unit_ms, 300);
        assert_eq!(config.pulse.leds_dir, PathBuf::from("/sys/class/leds"));
        assert_eq!(config.pipeline.poll_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_file_overrides() {
        let config = from_toml(
            r#"
            log_level = "debug"
            log_format = "json"

            [encoder]
            capacity = 64

            [pulse]
            unit_ms = 120
            leds_dir = "/tmp/leds"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.encoder.capacity, 64);
        assert_eq!(config.pulse.unit_ms, 120);
        assert_eq!(config.pulse.leds_dir, PathBuf::from("/tmp/leds"));
        assert_eq!(config.pipeline.chunk_size, 64);
    }

    #[test]
    fn test_rejects_tiny_capacity() {
        let err = from_toml("[encoder]\ncapacity = 4").unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn test_rejects_zero_chunk() {
        assert!(from_toml("[pipeline]\nchunk_size = 0").is_err());
    }
}
