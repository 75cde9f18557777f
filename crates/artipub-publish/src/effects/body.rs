use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::task::{Context, Poll, ready};

use bytes::Bytes;
use futures_util::Stream;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::data::{Progress, ProgressCallback, PublishPhase};

/// Shared view of a body stream after it has been handed to the client.
///
/// The client only reports that the request failed; this records whether
/// the failure started on our side of the pipe.
#[derive(Clone, Default)]
pub(crate) struct BodyMonitor {
    inner: Arc<MonitorState>,
}

#[derive(Default)]
struct MonitorState {
    sent:    AtomicU64,
    failure: OnceLock<(io::ErrorKind, String)>,
}

impl BodyMonitor {
    pub(crate) fn sent(&self) -> u64 { self.inner.sent.load(Ordering::Acquire) }

    /// The first read failure of the body, if any.
    pub(crate) fn failure(&self) -> Option<io::Error> {
        self.inner
            .failure
            .get()
            .map(|(kind, message)| io::Error::new(*kind, message.clone()))
    }

    fn record(&self, err: &io::Error) { let _ = self.inner.failure.set((err.kind(), err.to_string())); }
}

/// Request body streaming a file that must be exactly `expected` bytes long.
///
/// Reading more or fewer bytes than announced in `Content-Length` ends the
/// stream with an error instead of sending a body that disagrees with the
/// checksums.
pub(crate) struct FileBody {
    inner:       ReaderStream<File>,
    expected:    u64,
    sent:        u64,
    done:        bool,
    monitor:     BodyMonitor,
    on_progress: Option<ProgressCallback>,
}

impl FileBody {
    pub(crate) fn new(
        file: File,
        expected: u64,
        chunk_size: usize,
        monitor: BodyMonitor,
        on_progress: Option<ProgressCallback>,
    ) -> Self {
        Self {
            inner: ReaderStream::with_capacity(file, chunk_size),
            expected,
            sent: 0,
            done: false,
            monitor,
            on_progress,
        }
    }

    fn fail(&mut self, err: io::Error) -> Poll<Option<io::Result<Bytes>>> {
        self.monitor.record(&err);
        self.done = true;
        Poll::Ready(Some(Err(err)))
    }
}

impl Stream for FileBody {
    type Item = io::Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        if this.done {
            return Poll::Ready(None);
        }

        match ready!(Pin::new(&mut this.inner).poll_next(cx)) {
            Some(Ok(chunk)) => {
                this.sent += chunk.len() as u64;
                if this.sent > this.expected {
                    let expected = this.expected;
                    return this.fail(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("file grew while uploading, expected {expected} bytes"),
                    ));
                }

                this.monitor.inner.sent.store(this.sent, Ordering::Release);
                if let Some(ref callback) = this.on_progress {
                    callback(&Progress::new(
                        PublishPhase::Transmitting,
                        this.sent,
                        Some(this.expected),
                    ));
                }
                Poll::Ready(Some(Ok(chunk)))
            }
            Some(Err(e)) => this.fail(e),
            None if this.sent != this.expected => {
                let (sent, expected) = (this.sent, this.expected);
                this.fail(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("file shrank while uploading, read {sent} of {expected} bytes"),
                ))
            }
            None => {
                this.done = true;
                Poll::Ready(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    async fn body_for(content: &[u8], expected: u64) -> (tempfile::NamedTempFile, FileBody, BodyMonitor) {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), content).unwrap();
        let file = File::open(tmp.path()).await.unwrap();
        let monitor = BodyMonitor::default();
        let body = FileBody::new(file, expected, 4, monitor.clone(), None);
        (tmp, body, monitor)
    }

    #[tokio::test]
    async fn test_streams_whole_file() {
        let (_tmp, body, monitor) = body_for(b"0123456789", 10).await;
        let chunks: Vec<_> = body.collect().await;

        let bytes: Vec<u8> = chunks
            .into_iter()
            .flat_map(|c| c.unwrap().to_vec())
            .collect();
        assert_eq!(bytes, b"0123456789");
        assert_eq!(monitor.sent(), 10);
        assert!(monitor.failure().is_none());
    }

    #[tokio::test]
    async fn test_shorter_file_fails() {
        let (_tmp, mut body, monitor) = body_for(b"0123", 10).await;

        let mut last = None;
        while let Some(item) = body.next().await {
            last = Some(item);
        }

        let err = last.unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(monitor.failure().unwrap().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn test_longer_file_fails() {
        let (_tmp, mut body, monitor) = body_for(b"0123456789", 6).await;

        let mut errors = 0;
        while let Some(item) = body.next().await {
            if item.is_err() {
                errors += 1;
            }
        }

        assert_eq!(errors, 1);
        assert_eq!(monitor.failure().unwrap().kind(), io::ErrorKind::InvalidData);
        assert!(monitor.sent() <= 6);
    }
}
