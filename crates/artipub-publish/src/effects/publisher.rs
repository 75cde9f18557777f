use std::io;
use std::path::Path;

use artipub_verify::{
    Algorithm, DigestAccumulator, DigestSet, VerifyError, digest_reader_with_progress,
};
use futures_util::StreamExt;
use tokio::fs::File;
use tracing::{debug, warn};
use url::Url;

use super::body::{BodyMonitor, FileBody};
use super::http::{HttpClient, PutRequest};
use crate::core::{interpret_status, upload_headers};
use crate::data::{Progress, PublishOptions, PublishPhase, Published, UploadRequest};
use crate::error::{PublishError, Result};

/// Read size for both passes over the file.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Drives one upload: digest pass, request construction, body pass,
/// status check.
pub struct Publisher<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> Publisher<C> {
    pub fn new(client: C) -> Self { Self { client } }

    pub fn client(&self) -> &C { &self.client }

    /// Publish the file described by `request`.
    ///
    /// The file is read twice: once to compute the checksums that go into
    /// the headers, once as the request body. Both reads are streamed in
    /// [`CHUNK_SIZE`] pieces and their byte counts must agree with the size
    /// sent as `Content-Length`.
    ///
    /// Nothing is sent when the first read fails. With `options.dry_run`
    /// the client is never called; see [`rehearse`].
    pub async fn publish(
        &self,
        request: &UploadRequest,
        options: &PublishOptions,
    ) -> Result<Published> {
        let staged = stage(request, options).await?;
        if options.dry_run {
            return staged.drain(request.file_path(), options).await;
        }

        let path = request.file_path();
        let Staged {
            url,
            digests,
            headers,
            length,
            body,
            monitor,
        } = staged;

        let result = self
            .client
            .put(PutRequest {
                url: url.clone(),
                headers,
                credentials: request.get_credentials().cloned(),
                content_length: length,
                body: Box::pin(body),
            })
            .await;

        // A body read failure surfaces from the client as a transport error.
        if let Some(e) = monitor.failure() {
            return Err(PublishError::read(path, e));
        }

        let status = result.map_err(|e| {
            warn!(error = %e, "upload request failed");
            PublishError::Transport(Box::new(e))
        })?;

        options.report(Progress::new(
            PublishPhase::InterpretingResponse,
            monitor.sent(),
            Some(length),
        ));

        if let Err(e) = interpret_status(status) {
            warn!(status, "repository rejected the artifact");
            return Err(e);
        }

        debug!(status, bytes = monitor.sent(), "artifact published");
        options.report(Progress::new(PublishPhase::Completed, monitor.sent(), Some(length)));

        Ok(Published {
            url,
            digests,
            bytes_sent: monitor.sent(),
            dry_run: false,
        })
    }
}

/// Run every step of a publish except the PUT itself.
///
/// The file is digested and then read to the end as a request body would
/// be, with the same size checks. No HTTP client is involved.
pub async fn rehearse(request: &UploadRequest, options: &PublishOptions) -> Result<Published> {
    stage(request, options)
        .await?
        .drain(request.file_path(), options)
        .await
}

/// A request ready to go out, body not yet read.
struct Staged {
    url:     Url,
    digests: DigestSet,
    headers: Vec<(String, String)>,
    length:  u64,
    body:    FileBody,
    monitor: BodyMonitor,
}

impl Staged {
    async fn drain(mut self, path: &Path, options: &PublishOptions) -> Result<Published> {
        debug!("dry run, reading body without sending");
        while let Some(chunk) = self.body.next().await {
            chunk.map_err(|e| PublishError::read(path, e))?;
        }
        let sent = self.monitor.sent();
        options.report(Progress::new(PublishPhase::Completed, sent, Some(self.length)));
        Ok(Published {
            url:        self.url,
            digests:    self.digests,
            bytes_sent: sent,
            dry_run:    true,
        })
    }
}

async fn stage(request: &UploadRequest, options: &PublishOptions) -> Result<Staged> {
    let path = request.file_path();

    let digests = digest(path, options).await?;

    options.report(Progress::new(
        PublishPhase::BuildingRequest,
        0,
        Some(digests.bytes()),
    ));

    let length = tokio::fs::metadata(path)
        .await
        .map_err(|e| PublishError::read(path, e))?
        .len();
    if length != digests.bytes() {
        return Err(PublishError::read(
            path,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "file changed while publishing: digested {} bytes, now {length} bytes",
                    digests.bytes()
                ),
            ),
        ));
    }

    let url = request.destination();
    let headers = upload_headers(&digests, length);
    debug!(
        host = url.host_str().unwrap_or_default(),
        path = url.path(),
        length,
        authenticated = request.get_credentials().is_some(),
        proxied = request.get_proxy().is_some(),
        "request built"
    );

    let file = File::open(path)
        .await
        .map_err(|e| PublishError::read(path, e))?;
    let monitor = BodyMonitor::default();
    let body = FileBody::new(
        file,
        length,
        CHUNK_SIZE,
        monitor.clone(),
        options.on_progress.clone(),
    );

    options.report(Progress::new(PublishPhase::Transmitting, 0, Some(length)));

    Ok(Staged {
        url,
        digests,
        headers,
        length,
        body,
        monitor,
    })
}

async fn digest(path: &Path, options: &PublishOptions) -> Result<DigestSet> {
    let accumulator = if options.sha256 {
        DigestAccumulator::new(&Algorithm::ALL)
    } else {
        Ok(DigestAccumulator::default())
    }
    .map_err(|e| verify_error(path, e))?;

    options.report(Progress::new(PublishPhase::Digesting, 0, None));

    let file = File::open(path)
        .await
        .map_err(|e| PublishError::read(path, e))?;
    let metadata = file
        .metadata()
        .await
        .map_err(|e| PublishError::read(path, e))?;
    if !metadata.is_file() {
        return Err(PublishError::read(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    debug!(path = %path.display(), size = metadata.len(), "digesting");

    let total = Some(metadata.len());
    let digests = digest_reader_with_progress(file, accumulator, CHUNK_SIZE, |bytes| {
        options.report(Progress::new(PublishPhase::Digesting, bytes, total));
    })
    .await
    .map_err(|e| verify_error(path, e))?;

    debug!(
        md5 = digests.md5().unwrap_or_default(),
        sha1 = digests.sha1().unwrap_or_default(),
        bytes = digests.bytes(),
        "digests computed"
    );
    Ok(digests)
}

fn verify_error(path: &Path, err: VerifyError) -> PublishError {
    match err {
        VerifyError::Io(e) => PublishError::read(path, e),
        e @ VerifyError::NoAlgorithms => PublishError::Validation(e.to_string()),
    }
}
