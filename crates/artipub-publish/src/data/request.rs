use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use super::options::PublishOptions;
use crate::core::{parse_proxy, parse_target, with_parameters};
use crate::error::{PublishError, Result};

/// HTTP basic authentication credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: Option<impl Into<String>>) -> Self {
        Self {
            username: username.into(),
            password: password.map(Into::into),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// A validated, immutable description of one upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    file_path:   PathBuf,
    target_url:  Url,
    credentials: Option<Credentials>,
    proxy:       Option<Url>,
    parameters:  Vec<String>,
}

impl UploadRequest {
    /// Validate the two mandatory inputs. Touches neither disk nor network.
    pub fn new(file_path: impl Into<PathBuf>, target_url: &str) -> Result<Self> {
        let file_path = file_path.into();
        if file_path.as_os_str().is_empty() {
            return Err(PublishError::Validation("file path is empty".into()));
        }

        Ok(Self {
            file_path,
            target_url: parse_target(target_url)?,
            credentials: None,
            proxy: None,
            parameters: Vec::new(),
        })
    }

    /// Build a request from the library-level `publish` arguments.
    pub fn from_options(
        file_path: impl Into<PathBuf>,
        target_url: &str,
        options: &PublishOptions,
    ) -> Result<Self> {
        let mut request = Self::new(file_path, target_url)?.parameters(options.parameters.clone());
        if let Some(ref credentials) = options.credentials {
            request = request.credentials(credentials.clone());
        }
        if let Some(ref proxy) = options.proxy {
            request = request.proxy(proxy)?;
        }
        Ok(request)
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn proxy(mut self, proxy: &str) -> Result<Self> {
        self.proxy = Some(parse_proxy(proxy)?);
        Ok(self)
    }

    #[must_use]
    pub fn parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn file_path(&self) -> &Path { &self.file_path }

    pub fn target_url(&self) -> &Url { &self.target_url }

    pub fn get_credentials(&self) -> Option<&Credentials> { self.credentials.as_ref() }

    pub fn get_proxy(&self) -> Option<&Url> { self.proxy.as_ref() }

    pub fn get_parameters(&self) -> &[String] { &self.parameters }

    /// The URL the PUT goes to: the target with parameters appended.
    pub fn destination(&self) -> Url { with_parameters(&self.target_url, &self.parameters) }
}
