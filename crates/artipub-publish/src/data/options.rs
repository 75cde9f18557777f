use std::fmt;
use std::sync::Arc;

use super::progress::Progress;
use super::request::Credentials;

pub type ProgressCallback = Arc<dyn Fn(&Progress) + Send + Sync>;

/// Configuration for a publish operation.
///
/// # Examples
///
/// ```
/// use artipub_publish::{Credentials, PublishOptions};
///
/// let options = PublishOptions::default()
///     .credentials(Credentials::new("deployer", Some("secret")))
///     .parameter("build=42")
///     .parameter("env=prod");
/// ```
#[derive(Clone, Default)]
pub struct PublishOptions {
    /// HTTP basic authentication for the PUT.
    ///
    /// Default: None
    pub credentials: Option<Credentials>,

    /// Proxy every request through this URL.
    ///
    /// Only this option selects a proxy; `HTTP_PROXY` and friends are ignored.
    ///
    /// Default: None
    pub proxy: Option<String>,

    /// Segments appended to the target path as `;segment`, in order.
    ///
    /// Artifactory reads these as matrix parameters (`build=42`).
    ///
    /// Default: empty
    pub parameters: Vec<String>,

    /// Read and digest the file but never contact the repository.
    ///
    /// Default: false
    pub dry_run: bool,

    /// Also send `X-Checksum-Sha256`.
    ///
    /// Default: false
    pub sha256: bool,

    /// Progress callback invoked on phase transitions and per chunk while
    /// digesting and transmitting.
    ///
    /// Default: None
    pub on_progress: Option<ProgressCallback>,
}

impl fmt::Debug for PublishOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishOptions")
            .field("credentials", &self.credentials)
            .field("proxy", &self.proxy)
            .field("parameters", &self.parameters)
            .field("dry_run", &self.dry_run)
            .field("sha256", &self.sha256)
            .field("on_progress", &self.on_progress.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl PublishOptions {
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Append one path parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Replace all path parameters.
    #[must_use]
    pub fn parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn sha256(mut self, sha256: bool) -> Self {
        self.sha256 = sha256;
        self
    }

    /// Set the progress callback.
    ///
    /// # Examples
    ///
    /// ```
    /// use artipub_publish::{Progress, PublishOptions, PublishPhase};
    /// use std::sync::Arc;
    ///
    /// let options = PublishOptions::default().on_progress(Arc::new(|progress: &Progress| {
    ///     if progress.phase == PublishPhase::Transmitting {
    ///         if let Some(pct) = progress.percentage() {
    ///             println!("uploaded {pct:.1}%");
    ///         }
    ///     }
    /// }));
    /// ```
    #[must_use]
    pub fn on_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    pub(crate) fn report(&self, progress: Progress) {
        if let Some(ref callback) = self.on_progress {
            callback(&progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_keep_order() {
        let options = PublishOptions::default().parameter("a=1").parameter("b=2");
        assert_eq!(options.parameters, vec!["a=1", "b=2"]);

        let options = options.parameters(["c=3"]);
        assert_eq!(options.parameters, vec!["c=3"]);
    }

    #[test]
    fn test_debug_hides_password() {
        let options = PublishOptions::default().credentials(Credentials::new("me", Some("hunter2")));
        let rendered = format!("{options:?}");
        assert!(rendered.contains("me"));
        assert!(!rendered.contains("hunter2"));
    }
}
