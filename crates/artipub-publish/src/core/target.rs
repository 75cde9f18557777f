use url::Url;

use crate::error::{PublishError, Result};

/// Parse the artifact URL. It must be absolute and use http or https.
///
/// # Examples
///
/// ```
/// use artipub_publish::core::parse_target;
///
/// assert!(parse_target("https://repo.example.com/libs/app-1.0.jar").is_ok());
/// assert!(parse_target("libs/app-1.0.jar").is_err());
/// assert!(parse_target("").is_err());
/// ```
pub fn parse_target(target: &str) -> Result<Url> { parse_http_url("target", target) }

/// Parse a proxy URL with the same rules as the target.
pub fn parse_proxy(proxy: &str) -> Result<Url> { parse_http_url("proxy", proxy) }

fn parse_http_url(what: &str, raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PublishError::Validation(format!("{what} url is empty")));
    }

    let url = Url::parse(raw)
        .map_err(|e| PublishError::Validation(format!("invalid {what} url {raw:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(PublishError::Validation(format!(
                "unsupported {what} url scheme {scheme:?}, expected http or https"
            )));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(PublishError::Validation(format!("{what} url {raw:?} has no host")));
    }

    Ok(url)
}

/// Append `;parameter` segments to the URL path, keeping their order.
///
/// An empty list leaves the URL untouched. Any query string stays after
/// the parameters.
///
/// # Examples
///
/// ```
/// use artipub_publish::core::{parse_target, with_parameters};
///
/// let url = parse_target("https://repo.example.com/libs/a.jar").unwrap();
/// let url = with_parameters(&url, &["build=42".into(), "env=prod".into()]);
/// assert_eq!(url.as_str(), "https://repo.example.com/libs/a.jar;build=42;env=prod");
/// ```
pub fn with_parameters(url: &Url, parameters: &[String]) -> Url {
    let mut url = url.clone();
    if parameters.is_empty() {
        return url;
    }

    let path = format!("{};{}", url.path(), parameters.join(";"));
    url.set_path(&path);
    url
}
