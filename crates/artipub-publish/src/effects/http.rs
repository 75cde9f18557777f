use std::fmt;
use std::future::Future;
use std::io;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;
use url::Url;

use crate::data::Credentials;

/// A boxed stream type for request bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + Sync + 'a>>;

/// Everything the transport needs to send one upload.
pub struct PutRequest {
    pub url:            Url,
    /// Checksum headers and `Content-Length`, in sending order.
    pub headers:        Vec<(String, String)>,
    pub credentials:    Option<Credentials>,
    pub content_length: u64,
    /// Raw file bytes. Ends with an error if the file could not be read in
    /// full; implementations must abort the request in that case.
    pub body:           BoxStream<'static, io::Result<Bytes>>,
}

impl fmt::Debug for PutRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PutRequest")
            .field("url", &self.url.as_str())
            .field("headers", &self.headers)
            .field("credentials", &self.credentials)
            .field("content_length", &self.content_length)
            .field("body", &"{ ... }")
            .finish()
    }
}

/// Asynchronous HTTP client abstraction.
///
/// The publish pipeline needs exactly one operation: send a PUT with a
/// streamed body and report the status code. Proxying, TLS and connection
/// reuse belong to the implementation.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for transport failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send the request and return the response status code.
    ///
    /// # Errors
    ///
    /// Returns an error only when no HTTP response was obtained (DNS failure,
    /// refused connection, TLS failure, a body stream error, ...). Any status
    /// code, successful or not, is an `Ok`.
    fn put(
        &self,
        request: PutRequest,
    ) -> impl Future<Output = std::result::Result<u16, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::error::{PublishError, Result};

    const USER_AGENT: &str = concat!("artipub/", env!("CARGO_PKG_VERSION"));

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Build a client, optionally routing every request through `proxy`.
        ///
        /// Without an explicit proxy the client connects directly; proxy
        /// environment variables are not consulted.
        pub fn new(proxy: Option<&Url>) -> Result<Self> {
            let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);

            builder = match proxy {
                Some(url) => builder.proxy(reqwest::Proxy::all(url.as_str()).map_err(|e| {
                    PublishError::Validation(format!("invalid proxy url {url}: {e}"))
                })?),
                None => builder.no_proxy(),
            };

            let client = builder
                .build()
                .map_err(|e| PublishError::Transport(Box::new(e)))?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn put(&self, request: PutRequest) -> std::result::Result<u16, Self::Error> {
            let PutRequest {
                url,
                headers,
                credentials,
                body,
                ..
            } = request;

            let mut builder = self.client.put(url);

            for (name, value) in &headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            if let Some(credentials) = credentials {
                builder = builder.basic_auth(credentials.username, credentials.password);
            }

            let response = builder
                .body(reqwest::Body::wrap_stream(body))
                .send()
                .await?;

            Ok(response.status().as_u16())
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
