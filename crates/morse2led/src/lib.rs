//! morse2led
//!
//! Reads text on stdin, encodes it to Morse through the encoder service and
//! blinks it on a Linux LED (or prints the symbol stream).

mod command;
mod logging;
mod pipeline;
mod settings;

pub use command::{Command, USAGE};
pub use logging::init_logging;
pub use pipeline::{drain_to_led, drain_to_writer, feed};
pub use settings::{AppConfig, LogFormat, PipelineConfig, CONFIG_PATH_VAR, ENV_PREFIX};

use anyhow::Context;
use morse_encoder::EncoderService;
use pulse_driver::{find_led, list_leds, Indicator, PulseDriver, SysfsLed};
use std::future::Future;
use tokio::io::AsyncRead;
use tracing::{info, warn};

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ran to completion
    Finished,
    /// Stopped by Ctrl-C before the input ended
    Interrupted,
}

/// Execute a parsed command
pub async fn run(config: &AppConfig, command: Command) -> anyhow::Result<Outcome> {
    match command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(Outcome::Finished)
        }
        Command::List => {
            let names = list_leds(&config.pulse.leds_dir)?;
            println!("Available sysfs entries for LED control:");
            for name in names {
                println!(" {}", name);
            }
            Ok(Outcome::Finished)
        }
        Command::Print => run_print(config).await,
        Command::Blink { target } => run_blink(config, &target).await,
    }
}

async fn run_print(config: &AppConfig) -> anyhow::Result<Outcome> {
    let mut encoder = EncoderService::new(&config.encoder)?;
    encoder.open();
    let (writer, mut reader) = encoder.into_split();

    let feeder = tokio::spawn(pipeline::feed(
        tokio::io::stdin(),
        writer,
        config.pipeline.clone(),
    ));
    let printed = pipeline::drain_to_writer(
        &mut reader,
        tokio::io::stdout(),
        config.pipeline.poll_interval(),
    )
    .await;
    reader.release();

    printed?;
    feeder.await.context("Input task failed")??;
    Ok(Outcome::Finished)
}

async fn run_blink(config: &AppConfig, target: &str) -> anyhow::Result<Outcome> {
    let led_dir = find_led(&config.pulse.leds_dir, target)?;
    info!("sysfs entry = {}", led_dir.display());

    let led = SysfsLed::open(&led_dir)?;
    let mut driver = PulseDriver::new(led, config.pulse.unit());

    blink(tokio::io::stdin(), &mut driver, config, ctrl_c()).await
}

/// Resolves on the first Ctrl-C, or never if the handler cannot be installed
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Play `input` on the driver until it ends or `interrupt` resolves, then
/// switch the output off. An interrupted input task is abandoned rather than
/// awaited, since its read may never return.
async fn blink<R, I, F>(
    input: R,
    driver: &mut PulseDriver<I>,
    config: &AppConfig,
    interrupt: F,
) -> anyhow::Result<Outcome>
where
    R: AsyncRead + Unpin + Send + 'static,
    I: Indicator,
    F: Future<Output = ()>,
{
    let mut encoder = EncoderService::new(&config.encoder)?;
    encoder.open();
    let (writer, mut reader) = encoder.into_split();

    let feeder = tokio::spawn(pipeline::feed(input, writer, config.pipeline.clone()));

    let poll = config.pipeline.poll_interval();
    let played = tokio::select! {
        result = pipeline::drain_to_led(&mut reader, driver, poll) => Some(result),
        _ = interrupt => {
            warn!("Interrupted");
            None
        }
    };

    driver.shutdown()?;
    reader.release();

    match played {
        Some(result) => {
            result?;
            feeder.await.context("Input task failed")??;
            Ok(Outcome::Finished)
        }
        None => {
            feeder.abort();
            Ok(Outcome::Interrupted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_driver::PulseError;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;

    #[derive(Clone, Default)]
    struct SharedRecorder(Arc<Mutex<Vec<bool>>>);

    impl Indicator for SharedRecorder {
        fn set(&mut self, on: bool) -> Result<(), PulseError> {
            self.0.lock().unwrap().push(on);
            Ok(())
        }
    }

    fn driver(recorder: &SharedRecorder) -> PulseDriver<SharedRecorder> {
        PulseDriver::new(recorder.clone(), Duration::from_millis(300))
    }

    #[tokio::test(start_paused = true)]
    async fn test_blink_to_end_of_input() {
        let recorder = SharedRecorder::default();
        let mut driver = driver(&recorder);

        let outcome = blink(
            &b"E"[..],
            &mut driver,
            &AppConfig::default(),
            std::future::pending(),
        )
        .await
        .unwrap();

        assert_eq!(outcome, Outcome::Finished);
        // ". " then the final switch off
        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec![false, true, false, false, false]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_returns_while_input_open() {
        let recorder = SharedRecorder::default();
        let mut driver = driver(&recorder);

        // The sending half stays alive, so the input never reaches EOF
        let (_stdin, input) = tokio::io::duplex(64);

        let outcome = blink(
            input,
            &mut driver,
            &AppConfig::default(),
            tokio::time::sleep(Duration::from_secs(2)),
        )
        .await
        .unwrap();

        assert_eq!(outcome, Outcome::Interrupted);
        assert_eq!(*recorder.0.lock().unwrap(), vec![false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_mid_symbol_switches_off() {
        let recorder = SharedRecorder::default();
        let mut driver = driver(&recorder);

        let (mut stdin, input) = tokio::io::duplex(64);
        stdin.write_all(b"E").await.unwrap();

        // The dot is lit from 350 ms to 650 ms
        let outcome = blink(
            input,
            &mut driver,
            &AppConfig::default(),
            tokio::time::sleep(Duration::from_millis(500)),
        )
        .await
        .unwrap();

        assert_eq!(outcome, Outcome::Interrupted);
        assert_eq!(*recorder.0.lock().unwrap(), vec![false, true, false]);
        drop(stdin);
    }
}
