//! I/O operations: file streaming, the HTTP client seam and the publish
//! pipeline that drives both.

mod body;
mod http;
mod publisher;

pub use http::{BoxStream, HttpClient, PutRequest};
pub use publisher::{CHUNK_SIZE, Publisher, rehearse};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
