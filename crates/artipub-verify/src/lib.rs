//! Incremental checksums for artifact uploads.
//!
//! Tracks several digest algorithms over one stream of chunks and finalizes
//! them together into hex-encoded digests, the form artifact repositories
//! expect in their checksum headers.
//!
//! # Example
//!
//! ```
//! use artipub_verify::DigestAccumulator;
//!
//! let mut acc = DigestAccumulator::default();
//! acc.update(b"a");
//! acc.update(b"bc");
//!
//! let digests = acc.finalize();
//! assert_eq!(digests.md5(), Some("900150983cd24fb0d6963f7d28e17f72"));
//! assert_eq!(digests.sha1(), Some("a9993e364706816aba3e25717850c26c9cd0d89d"));
//! ```

pub use self::accumulator::{DigestAccumulator, DigestSet};
pub use self::error::{Result, VerifyError};
pub use self::hasher::{
    Algorithm, AlgorithmHasher, DigestHasher, Hasher, Md5Hasher, Sha1Hasher, Sha256Hasher,
};
pub use self::reader::{DigestReader, digest_reader, digest_reader_with_progress};

mod accumulator;
mod error;
mod hasher;
mod reader;
