use crate::{UrlError, UrlResult};
use url::Url;

/// Validates the URL an audit is asked to run against
///
/// The input is trimmed, must parse as an absolute URL, must use the `http`
/// or `https` scheme, and must name a host. No normalization beyond what the
/// `url` crate applies is performed; the page is fetched as given.
///
/// # Examples
///
/// ```
/// use seo_lens::url::parse_target_url;
///
/// let url = parse_target_url("  https://Example.com/page ").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
///
/// assert!(parse_target_url("example.com").is_err());
/// assert!(parse_target_url("ftp://example.com/").is_err());
/// ```
pub fn parse_target_url(input: &str) -> UrlResult<Url> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlError::Parse("empty URL".to_string()));
    }

    let url = Url::parse(input).map_err(|e| UrlError::Parse(format!("{}: {}", input, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost),
    }
}
