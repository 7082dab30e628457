//! HTTP fetcher implementation
//!
//! This module handles the outbound requests of an audit:
//! - Building the HTTP client with the configured user agent, headers and timeout
//! - GET requests for the audited page
//! - Error classification into a printable cause

use crate::config::Config;
use crate::url::parse_target_url;
use crate::UrlError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{redirect::Policy, Client};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Result of fetching the audited page
///
/// A failed request is still a `FetchResult`: `body` is `None` and `error`
/// carries the cause. HTTP error statuses keep their body so the caller can
/// decide what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchResult {
    /// Final URL after redirects (None when no response arrived)
    pub final_url: Option<String>,

    /// Page body content
    pub body: Option<String>,

    /// HTTP status code
    pub status_code: Option<u16>,

    /// Response headers, lowercase names; repeated headers are joined with ", "
    pub headers: BTreeMap<String, String>,

    /// Cause of the failure, if the request or body read failed
    pub error: Option<String>,
}

impl FetchResult {
    fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }

    /// Returns true if a 2xx response with a body was received
    pub fn is_success(&self) -> bool {
        self.body.is_some() && matches!(self.status_code, Some(code) if (200..300).contains(&code))
    }

    /// Returns true if the server answered with a 4xx or 5xx status
    pub fn is_http_error(&self) -> bool {
        matches!(self.status_code, Some(code) if code >= 400)
    }

    /// Returns the value of a response header, looked up case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Builds an HTTP client from the audit configuration
///
/// Every request made through the client carries the configured User-Agent
/// and extra headers and is bounded by `timeout_seconds`. Redirects are
/// followed (up to 10 hops).
///
/// # Example
///
/// ```no_run
/// use seo_lens::audit::build_http_client;
/// use seo_lens::config::Config;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(config.audit.timeout_seconds);

    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        // Invalid entries are rejected by config validation; skip them here
        // when a Config was assembled by hand.
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!("Ignoring invalid header '{}'", name),
        }
    }

    Client::builder()
        .user_agent(config.user_agent.user_agent_string())
        .default_headers(headers)
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the audited page
///
/// # Request Flow
///
/// 1. Validate the URL (absolute, http(s), with a host) → `Err(UrlError)`
/// 2. Send one GET request, following redirects, no retries
/// 3. Record status, headers and body whatever the status code
///
/// Network, DNS, TLS, timeout and body-read failures never produce an
/// `Err`; they come back as a `FetchResult` with `body = None`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchResult, UrlError> {
    let url = parse_target_url(url)?;

    tracing::debug!("GET {}", url);

    let response = match client.get(url.as_str()).send().await {
        Ok(response) => response,
        Err(e) => {
            let cause = classify_error(&e);
            tracing::warn!("Fetch of {} failed: {}", url, cause);
            return Ok(FetchResult::failed(cause));
        }
    };

    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();
    let headers = collect_headers(response.headers());

    if status_code >= 400 {
        tracing::warn!("{} answered HTTP {}", url, status_code);
    }

    match response.text().await {
        Ok(body) => Ok(FetchResult {
            final_url: Some(final_url),
            body: Some(body),
            status_code: Some(status_code),
            headers,
            error: None,
        }),
        Err(e) => Ok(FetchResult {
            final_url: Some(final_url),
            body: None,
            status_code: Some(status_code),
            headers,
            error: Some(format!("Failed to read body: {}", classify_error(&e))),
        }),
    }
}

/// Flattens a header map into lowercase-name → value pairs
fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    collected
}

/// Turns a reqwest error into a short cause string
pub(crate) fn classify_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_redirect() {
        "Too many redirects".to_string()
    } else {
        e.to_string()
    }
}
