//! Line-delimited JSON request loop.
//!
//! Reads one [`ToolCall`] per input line, runs it to completion, and writes
//! one response per call. Requests are handled strictly in order.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::executor::CommandExecutor;
use crate::protocol::{AgentResponse, ToolCall};

/// Serve requests from `reader` until EOF, writing responses to `writer`.
///
/// A malformed line (bad JSON or invalid UTF-8) produces a failed response and
/// the loop continues. Only I/O errors on the streams themselves end the loop
/// early.
pub async fn run<R, W>(
    mut reader: R,
    mut writer: W,
    executor: &CommandExecutor<'_>,
    pretty: bool,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut handled = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_slice::<ToolCall>(line) {
            Ok(call) => executor.execute(call).await,
            Err(e) => {
                tracing::warn!(error = %e, "malformed request line");
                AgentResponse::invalid_request(e)
            }
        };

        let mut encoded = if pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        encoded.push('\n');
        writer.write_all(encoded.as_bytes()).await?;
        writer.flush().await?;
        handled += 1;
    }

    tracing::info!(handled, "input closed");
    Ok(())
}
