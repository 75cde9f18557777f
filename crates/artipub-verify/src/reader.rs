use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use tokio::io::{AsyncRead, AsyncReadExt, ReadBuf};

use crate::{DigestAccumulator, DigestSet, Result};

/// Async reader that digests data as it passes through.
/// Wraps any `AsyncRead` source so the bytes are touched once.
pub struct DigestReader<R> {
    reader:      R,
    accumulator: DigestAccumulator,
}

impl<R> DigestReader<R> {
    pub fn new(reader: R, accumulator: DigestAccumulator) -> Self {
        Self {
            reader,
            accumulator,
        }
    }

    /// Bytes read through this reader so far.
    pub fn bytes(&self) -> u64 { self.accumulator.bytes() }

    /// Close the running digests. Only meaningful once the inner reader hit EOF.
    pub fn finish(self) -> DigestSet { self.accumulator.finalize() }
}

impl<R: AsyncRead + Unpin> AsyncRead for DigestReader<R> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = &mut *self;
        let before = buf.filled().len();
        ready!(Pin::new(&mut this.reader).poll_read(cx, buf))?;
        let filled = &buf.filled()[before..];
        if !filled.is_empty() {
            this.accumulator.update(filled);
        }
        Poll::Ready(Ok(()))
    }
}

const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Drive `reader` to EOF through `accumulator`.
///
/// On a read error the accumulator is dropped with the reader and the error
/// is returned; a partial digest set never escapes.
pub async fn digest_reader<R>(reader: R, accumulator: DigestAccumulator) -> Result<DigestSet>
where
    R: AsyncRead + Unpin,
{
    digest_reader_with_progress(reader, accumulator, DEFAULT_BUFFER_SIZE, |_| {}).await
}

/// Like [`digest_reader`], reading at most `buffer_size` bytes at a time and
/// calling `on_chunk` with the running byte count after every read.
pub async fn digest_reader_with_progress<R, F>(
    reader: R,
    accumulator: DigestAccumulator,
    buffer_size: usize,
    mut on_chunk: F,
) -> Result<DigestSet>
where
    R: AsyncRead + Unpin,
    F: FnMut(u64),
{
    let mut reader = DigestReader::new(reader, accumulator);
    let mut buf = vec![0u8; buffer_size.max(1)];
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        on_chunk(reader.bytes());
    }
    Ok(reader.finish())
}
