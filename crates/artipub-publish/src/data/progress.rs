use std::fmt;

/// Phases of one publish attempt.
///
/// Attempts move forward only:
/// Digesting → BuildingRequest → Transmitting → InterpretingResponse → Completed
///
/// A failure in any phase ends the attempt; there is no retry phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishPhase {
    /// Reading the file once to compute its checksums.
    #[default]
    Digesting,

    /// Checking the file size and assembling URL, headers and credentials.
    BuildingRequest,

    /// Streaming the file as the request body.
    ///
    /// In dry-run mode the body is read locally and discarded.
    Transmitting,

    /// Waiting for and classifying the response status.
    InterpretingResponse,

    /// The repository acknowledged the artifact (or the dry run finished).
    Completed,
}

impl fmt::Display for PublishPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishPhase::Digesting => write!(f, "Digesting"),
            PublishPhase::BuildingRequest => write!(f, "Building request"),
            PublishPhase::Transmitting => write!(f, "Uploading"),
            PublishPhase::InterpretingResponse => write!(f, "Waiting"),
            PublishPhase::Completed => write!(f, "Completed"),
        }
    }
}

/// Snapshot handed to progress callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub phase: PublishPhase,

    /// Bytes handled in the current phase.
    pub bytes: u64,

    /// Size of the file, once it is known.
    pub total_bytes: Option<u64>,
}

impl Progress {
    pub fn new(phase: PublishPhase, bytes: u64, total_bytes: Option<u64>) -> Self {
        Self {
            phase,
            bytes,
            total_bytes,
        }
    }

    /// Percentage of the current phase, if the total is known.
    ///
    /// An empty file counts as fully processed.
    pub fn percentage(&self) -> Option<f64> {
        match self.total_bytes {
            Some(0) => Some(100.0),
            Some(total) => Some(self.bytes as f64 / total as f64 * 100.0),
            None => None,
        }
    }
}
