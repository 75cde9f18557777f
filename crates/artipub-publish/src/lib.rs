//! Checksummed HTTP PUT uploads of local files to artifact repositories.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable requests, options, progress and outcomes
//! - [`core`] - Pure transformations (URL parameters, headers, status)
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Key Features
//!
//! - **Streaming**: The file is never held in memory; both the digest pass
//!   and the body pass read it in fixed-size chunks
//! - **Repository checksums**: MD5 and SHA-1 (optionally SHA-256) travel as
//!   `X-Checksum-*` headers so the repository can verify what it stores
//! - **Consistent**: Digested bytes, `Content-Length` and transmitted bytes
//!   must agree, a file modified mid-upload fails instead of being sent
//! - **Mechanism-Only**: No retries; errors say whether a retry could help
//!
//! # Example
//!
//! ```no_run
//! use artipub_publish::{Credentials, PublishOptions, publish};
//!
//! # async fn run() -> artipub_publish::Result<()> {
//! let options = PublishOptions::default()
//!     .credentials(Credentials::new("deployer", Some("secret")))
//!     .parameter("build=42");
//!
//! let published = publish(
//!     "target/app-1.0.jar",
//!     "https://repo.example.com/artifactory/libs-release/app/1.0/app-1.0.jar",
//!     &options,
//! )
//! .await?;
//! println!("sha1 {}", published.digests.sha1().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

#[cfg(feature = "reqwest")]
use std::path::PathBuf;

pub use data::{
    Credentials, Progress, ProgressCallback, PublishOptions, PublishPhase, Published,
    UploadRequest,
};
pub use effects::{BoxStream, CHUNK_SIZE, HttpClient, Publisher, PutRequest, rehearse};
pub use error::{PublishError, Result};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use artipub_verify::{Algorithm, DigestSet};

/// Publish `file_path` to `target_url` with a default `reqwest` client.
///
/// Inputs are validated before anything is opened; the proxy from
/// `options` is applied to the client. A dry run goes through [`rehearse`]
/// and never builds a client.
#[cfg(feature = "reqwest")]
pub async fn publish(
    file_path: impl Into<PathBuf>,
    target_url: &str,
    options: &PublishOptions,
) -> Result<Published> {
    let request = UploadRequest::from_options(file_path, target_url, options)?;
    if options.dry_run {
        return rehearse(&request, options).await;
    }
    let client = ReqwestClient::new(request.get_proxy())?;
    Publisher::new(client).publish(&request, options).await
}
