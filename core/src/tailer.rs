//! Follows the game server console log.
//!
//! Reading starts at the current end of the file; nothing written before the
//! bridge started is replayed. Each complete line starting with
//! [`SENTINEL_PREFIX`] is handed to the dispatcher and fully handled before the
//! next line is read. The stop signal is checked once per iteration, so
//! shutdown waits for at most one read/handle cycle or one poll interval.

use std::io::SeekFrom;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader};
use tokio::sync::watch;
use tokio::time::{Duration, sleep};

use crate::dispatch::Dispatcher;
use crate::error::BridgeError;

/// Prefix the game plugin writes in front of every event payload.
pub const SENTINEL_PREFIX: &str = "drinkinggame_output: ";

/// Delay before checking the log again when no complete line is available.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Payload of an event line, if it is one.
pub fn event_payload(line: &str) -> Option<&str> {
    line.trim_end_matches(['\r', '\n'])
        .strip_prefix(SENTINEL_PREFIX)
}

/// Tail `path` until `shutdown` becomes `true`.
///
/// Errors opening or reading the log, and errors writing the command file,
/// are returned; the caller is expected to terminate.
pub async fn tail_console_log<P: AsRef<Path>>(
    path: P,
    dispatcher: &Dispatcher,
    shutdown: watch::Receiver<bool>,
) -> Result<(), BridgeError> {
    let path = path.as_ref();
    let file = File::open(path).await?;
    let mut reader = BufReader::new(file);
    let mut pos = reader.seek(SeekFrom::End(0)).await?;

    tracing::info!(path = %path.display(), start_byte = pos, "Tailing console log");

    let mut buf = Vec::new();
    let mut events = 0u64;

    while !*shutdown.borrow() {
        let n = reader.read_until(b'\n', &mut buf).await?;
        pos += n as u64;

        if buf.last() != Some(&b'\n') {
            // Nothing new, or the game is midway through writing a line.
            let len = reader.get_ref().metadata().await?.len();
            if len < pos {
                tracing::warn!(
                    path = %path.display(),
                    len,
                    pos,
                    "Console log truncated, skipping to end"
                );
                pos = reader.seek(SeekFrom::End(0)).await?;
                buf.clear();
            }
            sleep(POLL_INTERVAL).await;
            continue;
        }

        {
            let line = String::from_utf8_lossy(&buf);
            if let Some(payload) = event_payload(&line) {
                events += 1;
                tracing::trace!(payload, "Event line");
                dispatcher.handle_message(payload).await?;
            }
        }
        buf.clear();
    }

    tracing::info!(events, "Stopped tailing console log");
    Ok(())
}
