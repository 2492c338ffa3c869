//! Newline-delimited JSON bridge for the host command channel.
//!
//! Reads `CommandEnvelope` messages one per line, dispatches them through
//! [`HostCommandRouter`], and writes one `ResponseEnvelope` line per
//! non-blank input line.
//!
//! When run on stdin/stdout, stdout is exclusively reserved for the JSON
//! protocol; all diagnostic output (tracing, logs) must go to stderr.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

use crate::engine::EmpathyEngine;
use crate::error::{Result, SolaceError};
use crate::host::contract::{CommandEnvelope, CommandName, ResponseEnvelope};
use crate::host::handler::HostCommandRouter;

/// Request id used for lines that could not be parsed as an envelope.
pub const PARSE_ERROR_ID: &str = "parse-error";

/// Run the bridge on stdin/stdout until stdin closes or `runtime.stop`.
pub async fn run_stdio_bridge(engine: EmpathyEngine) -> Result<()> {
    let router = HostCommandRouter::new(engine);
    let reader = BufReader::new(tokio::io::stdin());
    let writer = BufWriter::new(tokio::io::stdout());
    run_bridge(&router, reader, writer).await
}

/// Run the bridge over any line reader and writer.
///
/// Returns when the reader hits EOF or after acknowledging `runtime.stop`.
pub async fn run_bridge<R, W>(router: &HostCommandRouter, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .map_err(|e| SolaceError::Bridge(format!("failed to read command line: {e}")))?;

        if bytes_read == 0 {
            tracing::info!("input closed (EOF); shutting down bridge");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let envelope: CommandEnvelope = match serde_json::from_str(trimmed) {
            Ok(env) => env,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse command envelope");
                let response = ResponseEnvelope::error(
                    PARSE_ERROR_ID,
                    format!("failed to parse command envelope: {e}"),
                );
                write_response(&mut writer, &response).await?;
                continue;
            }
        };

        let is_stop = envelope.command == CommandName::RuntimeStop;
        let response = router.dispatch(&envelope);
        write_response(&mut writer, &response).await?;

        if is_stop && response.ok {
            tracing::info!("runtime.stop received; shutting down bridge");
            break;
        }
    }

    Ok(())
}

async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &ResponseEnvelope,
) -> Result<()> {
    let json = serde_json::to_string(response)?;
    write_line(writer, &json).await
}

/// Write a single JSON line and flush.
async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, json: &str) -> Result<()> {
    writer
        .write_all(json.as_bytes())
        .await
        .map_err(|e| SolaceError::Bridge(format!("failed to write response: {e}")))?;
    writer
        .write_all(b"\n")
        .await
        .map_err(|e| SolaceError::Bridge(format!("failed to write newline: {e}")))?;
    writer
        .flush()
        .await
        .map_err(|e| SolaceError::Bridge(format!("failed to flush output: {e}")))?;
    Ok(())
}
