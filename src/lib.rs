//! SEO-Lens: a single-page SEO auditor
//!
//! This crate fetches one page, extracts the facts search engines care about
//! (title, description, canonical, robots directive, hreflang alternates,
//! images, structured data, links), probes a bounded set of the page's links,
//! and turns the findings into recommendations.

pub mod audit;
pub mod config;
pub mod output;
pub mod recommend;
pub mod robots;
pub mod tools;
pub mod url;

use thiserror::Error;

/// Main error type for audit operations
///
/// Only an invalid input URL, a client that cannot be built, or a primary
/// page that cannot be fetched at all stop an audit. Everything else is
/// recorded in the report.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),

    #[error("Failed to fetch {url}: {message}")]
    FetchFailure { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use audit::{run_audit, AuditReport, Auditor, LinkStatus, LinkStatusMap, PageFacts};
pub use config::Config;
pub use recommend::{recommend, Recommendation, Severity};
pub use robots::RobotsTxt;
pub use crate::url::{parse_target_url, Origin};
