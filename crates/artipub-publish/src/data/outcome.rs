use artipub_verify::DigestSet;
use url::Url;

/// A successful publish.
///
/// Failures are reported as [`PublishError`](crate::PublishError); there is
/// no partially successful outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    /// Final PUT destination, parameters included.
    pub url: Url,

    /// Checksums sent with the request.
    pub digests: DigestSet,

    /// Body bytes streamed (or, for a dry run, read and discarded).
    pub bytes_sent: u64,

    /// True when the repository was never contacted.
    pub dry_run: bool,
}
