//! Immutable data types for publish operations.
//!
//! Requests, options, progress snapshots and outcomes. Nothing in here
//! performs I/O.

pub mod options;
pub mod outcome;
pub mod progress;
pub mod request;

pub use options::{ProgressCallback, PublishOptions};
pub use outcome::Published;
pub use progress::{Progress, PublishPhase};
pub use request::{Credentials, UploadRequest};
