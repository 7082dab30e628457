//! Robots.txt handling module
//!
//! This module fetches `<origin>/robots.txt` for the audited page and exposes
//! its raw text. The parsed form answers whether a URL is allowed for the
//! auditing bot and lists the sitemaps the file declares.

mod parser;

pub use parser::ParsedRobots;

use crate::audit::fetcher::classify_error;
use crate::url::Origin;
use reqwest::{Client, StatusCode};
use serde::{Serialize, Serializer};

/// Result of reading robots.txt
///
/// A 404, any other non-200 answer, and a network failure all collapse into
/// `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsTxt {
    /// robots.txt was served with HTTP 200
    Present(String),
    /// robots.txt could not be read
    Absent,
}

impl RobotsTxt {
    /// Returns the raw text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Present(text) => Some(text),
            Self::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Parses the file; an absent file allows everything
    pub fn parse(&self) -> ParsedRobots {
        match self {
            Self::Present(text) => ParsedRobots::from_content(text),
            Self::Absent => ParsedRobots::allow_all(),
        }
    }
}

impl Serialize for RobotsTxt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(text) => serializer.serialize_str(text),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

/// Fetches robots.txt for an origin
///
/// # Arguments
///
/// * `client` - The HTTP client to use (carries user agent and timeout)
/// * `origin` - The origin whose robots.txt should be read
///
/// # Returns
///
/// `RobotsTxt::Present` with the body on HTTP 200, `RobotsTxt::Absent`
/// otherwise. This function never fails.
pub async fn read_robots(client: &Client, origin: &Origin) -> RobotsTxt {
    let Some(robots_url) = origin.join("/robots.txt") else {
        tracing::warn!("Cannot build robots.txt URL for {}", origin);
        return RobotsTxt::Absent;
    };

    tracing::debug!("GET {}", robots_url);

    let response = match client.get(robots_url.as_str()).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("robots.txt fetch failed: {}", classify_error(&e));
            return RobotsTxt::Absent;
        }
    };

    if response.status() != StatusCode::OK {
        tracing::debug!("robots.txt answered HTTP {}", response.status().as_u16());
        return RobotsTxt::Absent;
    }

    match response.text().await {
        Ok(text) => RobotsTxt::Present(text),
        Err(e) => {
            tracing::debug!("robots.txt body read failed: {}", classify_error(&e));
            RobotsTxt::Absent
        }
    }
}
