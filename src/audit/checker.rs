//! Link reachability checker
//!
//! Probes a bounded number of links with HEAD requests and records the
//! status code each one answered with. A failed probe only affects its own
//! entry.

use crate::audit::fetcher::classify_error;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Outcome of probing one link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkStatus {
    /// The server answered with this HTTP status
    Code(u16),
    /// Timeout, DNS failure, refused connection, TLS error...
    Error,
}

impl LinkStatus {
    /// Returns true for 2xx and 3xx answers
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Code(code) if (200..400).contains(code))
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{}", code),
            Self::Error => write!(f, "error"),
        }
    }
}

impl Serialize for LinkStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Code(code) => serializer.serialize_u16(*code),
            Self::Error => serializer.serialize_str("error"),
        }
    }
}

/// Status of each probed link, keyed by URL
pub type LinkStatusMap = BTreeMap<String, LinkStatus>;

/// Picks the links that will be probed: the first `limit` distinct URLs
/// in input order
pub fn select_probe_targets(urls: &[String], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.iter()
        .filter(|url| seen.insert(url.as_str()))
        .take(limit)
        .cloned()
        .collect()
}

/// Probes links and records their status codes
///
/// At most `limit` distinct URLs are probed, so the result never has more
/// than `limit` entries. Up to `concurrency` probes are in flight at once;
/// results are keyed by URL so completion order does not matter.
///
/// # Arguments
///
/// * `client` - The HTTP client to use (carries user agent and timeout)
/// * `urls` - Candidate links, in priority order
/// * `limit` - Maximum number of links to probe
/// * `concurrency` - Maximum number of simultaneous probes
pub async fn check_statuses(
    client: &Client,
    urls: &[String],
    limit: usize,
    concurrency: usize,
) -> LinkStatusMap {
    let targets = select_probe_targets(urls, limit);
    if targets.is_empty() {
        return LinkStatusMap::new();
    }

    tracing::info!(
        "Probing {} of {} links (concurrency {})",
        targets.len(),
        urls.len(),
        concurrency.max(1)
    );

    stream::iter(targets)
        .map(|url| async move {
            let status = probe_link(client, &url).await;
            (url, status)
        })
        .buffer_unordered(concurrency.max(1))
        .collect::<LinkStatusMap>()
        .await
}

/// Sends one HEAD request and maps the outcome to a [`LinkStatus`]
pub async fn probe_link(client: &Client, url: &str) -> LinkStatus {
    match client.head(url).send().await {
        Ok(response) => {
            let code = response.status().as_u16();
            tracing::debug!("HEAD {} -> {}", url, code);
            LinkStatus::Code(code)
        }
        Err(e) => {
            tracing::debug!("HEAD {} failed: {}", url, classify_error(&e));
            LinkStatus::Error
        }
    }
}
