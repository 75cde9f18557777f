//! Error types for artipub-publish.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a publish attempt failed.
///
/// Every failure is terminal for the attempt; the crate never retries.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Bad or missing caller input. Raised before any I/O.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The local file could not be read in full, or changed while being read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// The HTTP exchange itself failed (DNS, connect, TLS, reset, ...).
    #[error("error making http request: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The repository answered with something other than `201 Created`.
    #[error("request received invalid status code: {status}")]
    ServerRejected { status: u16 },
}

impl PublishError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PublishError::Read {
            path: path.into(),
            source,
        }
    }

    /// Status code returned by the repository, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            PublishError::ServerRejected { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller could reasonably try again unchanged.
    ///
    /// Network failures and 5xx answers qualify; local read problems, bad
    /// input and 4xx answers need someone to fix something first.
    pub fn is_retryable(&self) -> bool {
        match self {
            PublishError::Transport(_) => true,
            PublishError::ServerRejected { status } => (500..600).contains(status),
            PublishError::Validation(_) | PublishError::Read { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;
