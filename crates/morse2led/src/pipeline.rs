//! Input → encoder → output tasks

use crate::settings::PipelineConfig;
use anyhow::Context;
use morse_encoder::{EncoderError, MorseReader, MorseWriter};
use pulse_driver::{Indicator, PulseDriver};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Symbol bytes pulled from the encoder per read
const DRAIN_CHUNK: usize = 16;

/// Push all of `input` through the encoder, backing off while it is full.
///
/// The writer is dropped on return, which tells the read side no more
/// symbols will arrive.
pub async fn feed<R>(mut input: R, mut writer: MorseWriter, config: PipelineConfig) -> anyhow::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let poll = config.poll_interval();
    let mut chunk = vec![0u8; config.chunk_size];
    let mut total = 0;

    loop {
        let n = input.read(&mut chunk).await.context("Failed to read input")?;
        if n == 0 {
            break;
        }

        let mut offset = 0;
        while offset < n {
            match writer.write(&chunk[offset..n]) {
                Ok(consumed) => offset += consumed,
                Err(EncoderError::NoProgress { pending }) => {
                    debug!("Encoder full, {} input bytes waiting", pending);
                    tokio::time::sleep(poll).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
        total += n;
    }

    info!("Input finished after {} bytes", total);
    Ok(total)
}

/// Wait for the next run of symbol bytes, `None` once the writer is gone
/// and everything has been read
async fn next_chunk(reader: &mut MorseReader, buf: &mut [u8], poll: Duration) -> Option<usize> {
    loop {
        let drained = reader.is_drained();
        let n = reader.read(buf);
        if n > 0 {
            return Some(n);
        }
        if drained {
            return None;
        }
        tokio::time::sleep(poll).await;
    }
}

/// Blink every symbol byte on the driver's output
pub async fn drain_to_led<I: Indicator>(
    reader: &mut MorseReader,
    driver: &mut PulseDriver<I>,
    poll: Duration,
) -> anyhow::Result<usize> {
    let mut buf = [0u8; DRAIN_CHUNK];
    let mut total = 0;

    while let Some(n) = next_chunk(reader, &mut buf, poll).await {
        driver.play_all(&buf[..n]).await?;
        total += n;
    }

    info!("Played {} symbol bytes", total);
    Ok(total)
}

/// Copy the symbol stream to `out`
pub async fn drain_to_writer<W>(reader: &mut MorseReader, mut out: W, poll: Duration) -> anyhow::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = [0u8; DRAIN_CHUNK];
    let mut total = 0;

    while let Some(n) = next_chunk(reader, &mut buf, poll).await {
        out.write_all(&buf[..n])
            .await
            .context("Failed to write Morse output")?;
        out.flush().await.context("Failed to write Morse output")?;
        total += n;
    }

    Ok(total)
}
