// src/app.rs

use ringstore_buffering::RingBuffer;
use ringstore_config::RingstoreConfig;
use ringstore_core::RingstoreResult;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_evicted: usize,
}

/// Keeps the most recent `capacity` input lines and replays them oldest first.
///
/// Lines are kept as raw bytes, so input that is not UTF-8 passes through
/// unchanged.
pub struct RingstoreApp {
    config: RingstoreConfig,
}

impl RingstoreApp {
    pub fn new(config: RingstoreConfig) -> Self {
        Self { config }
    }

    pub async fn run<R, W>(&self, mut reader: R, mut writer: W) -> RingstoreResult<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let capacity = self.config.buffer.capacity;
        let mut buffer: RingBuffer<Vec<u8>> = RingBuffer::new(capacity);
        let mut lines_read = 0;

        loop {
            let mut line = Vec::new();
            if reader.read_until(b'\n', &mut line).await? == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            buffer.add(line);
            lines_read += 1;
        }
        debug!(lines_read, retained = buffer.size(), "input exhausted");

        let mut lines_written = 0;
        while !buffer.empty() {
            let line = buffer.remove();
            writer.write_all(&line).await?;
            writer.write_all(b"\n").await?;
            lines_written += 1;
        }
        writer.flush().await?;

        let summary = RunSummary {
            lines_read,
            lines_written,
            lines_evicted: lines_read - lines_written,
        };
        info!(
            "Read {} lines, wrote {}, evicted {} (capacity {})",
            summary.lines_read, summary.lines_written, summary.lines_evicted, capacity
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringstore_config::BufferSettings;

    fn app_with_capacity(capacity: usize) -> RingstoreApp {
        RingstoreApp::new(RingstoreConfig {
            buffer: BufferSettings { capacity },
            ..RingstoreConfig::default()
        })
    }

    #[tokio::test]
    async fn replays_short_input_unchanged() {
        let app = app_with_capacity(10);
        let mut out = Vec::new();
        let summary = app.run(&b"123\n42\n23\n"[..], &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "123\n42\n23\n");
        assert_eq!(
            summary,
            RunSummary {
                lines_read: 3,
                lines_written: 3,
                lines_evicted: 0,
            }
        );
    }

    #[tokio::test]
    async fn keeps_only_last_lines() {
        let app = app_with_capacity(2);
        let mut out = Vec::new();
        let summary = app.run(&b"a\nb\nc\nd"[..], &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "c\nd\n");
        assert_eq!(summary.lines_evicted, 2);
    }

    #[tokio::test]
    async fn invalid_utf8_lines_pass_through() {
        let app = app_with_capacity(2);
        let mut out = Vec::new();
        let summary = app.run(&b"a\n\xff\n"[..], &mut out).await.unwrap();

        assert_eq!(out, b"a\n\xff\n");
        assert_eq!(summary.lines_written, 2);
    }

    #[tokio::test]
    async fn invalid_utf8_does_not_drop_retained_lines() {
        let app = app_with_capacity(2);
        let mut out = Vec::new();
        app.run(&b"old\n\xfe\xff\nnew"[..], &mut out).await.unwrap();

        assert_eq!(out, b"\xfe\xff\nnew\n");
    }

    #[tokio::test]
    async fn empty_input_writes_nothing() {
        let app = app_with_capacity(4);
        let mut out = Vec::new();
        let summary = app.run(&b""[..], &mut out).await.unwrap();

        assert!(out.is_empty());
        assert_eq!(summary.lines_read, 0);
    }
}
