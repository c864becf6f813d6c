//! morse2led - Main Entry Point

use anyhow::Context;
use morse2led::{init_logging, run, AppConfig, Command, Outcome};
use std::process::ExitCode;
use tracing::{error, info};

/// 128 + SIGINT
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // Help works even with a broken config file
    let config = if command == Command::Help {
        AppConfig::default()
    } else {
        match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    if let Err(e) = init_logging(&config.log_level, config.log_format) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    info!("=== morse2led v{} ===", env!("CARGO_PKG_VERSION"));

    match execute(&config, command) {
        Ok(Outcome::Finished) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => ExitCode::from(EXIT_INTERRUPTED),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(config: &AppConfig, command: Command) -> anyhow::Result<Outcome> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let result = runtime.block_on(run(config, command));

    // A stdin read blocked on an open pipe or terminal must not hold the
    // process after the pipeline has stopped
    runtime.shutdown_background();
    result
}
