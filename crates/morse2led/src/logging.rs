//! Tracing subscriber setup

use crate::settings::LogFormat;
use anyhow::Context;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging on stderr, leaving stdout for Morse output
pub fn init_logging(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let level: Level = level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", level))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    }
    .context("Failed to set tracing subscriber")
}
