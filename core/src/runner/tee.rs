use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;

use crate::error::RunnerError;
use crate::sink::{OutputSink, StreamKind};

/// Drain one child stream line by line into `sink` until EOF.
///
/// Resolves to the number of lines forwarded. Bytes that are not valid UTF-8
/// are replaced rather than aborting the drain.
pub(crate) fn pump<R>(
    reader: R,
    stream: StreamKind,
    sink: Arc<dyn OutputSink>,
) -> JoinHandle<Result<u64, RunnerError>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::with_capacity(256);
        let mut count = 0u64;
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|source| RunnerError::StreamIo {
                    stream: stream.as_str(),
                    source,
                })?;
            if n == 0 {
                break;
            }
            let line = String::from_utf8_lossy(trim_eol(&buf));
            sink.line(stream, &line);
            count += 1;
        }
        tracing::trace!(target: "robotrun.runner", stream = stream.as_str(), lines = count, "stream closed");
        Ok(count)
    })
}

fn trim_eol(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[tokio::test]
    async fn forwards_every_line_including_unterminated_tail() {
        let sink = Arc::new(MemorySink::new());
        let data: &[u8] = b"one\r\ntwo\n\nlast";
        let count = pump(data, StreamKind::Stdout, sink.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(count, 4);
        assert_eq!(sink.stream(StreamKind::Stdout), vec!["one", "two", "", "last"]);
    }

    #[tokio::test]
    async fn invalid_utf8_is_replaced() {
        let sink = Arc::new(MemorySink::new());
        let data: &[u8] = b"caf\xff\n";
        pump(data, StreamKind::Stderr, sink.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(sink.stream(StreamKind::Stderr), vec!["caf\u{fffd}"]);
    }
}
