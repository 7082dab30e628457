//! Audit module for single-page SEO checks
//!
//! This module contains the audit pipeline, including:
//! - HTTP fetching of the audited page
//! - HTML fact extraction and link partitioning
//! - Bounded link reachability probing
//! - Overall audit coordination

mod checker;
mod coordinator;
mod extractor;
pub(crate) mod fetcher;

pub use checker::{check_statuses, probe_link, select_probe_targets, LinkStatus, LinkStatusMap};
pub use coordinator::{AuditReport, Auditor};
pub use extractor::{extract_facts, Hreflang, Image, PageFacts, DEFAULT_ROBOTS_DIRECTIVE};
pub use fetcher::{build_http_client, fetch_page, FetchResult};

use crate::config::Config;
use crate::AuditError;

/// Runs a complete audit of one page
///
/// This is the main entry point. It will:
/// 1. Validate the URL
/// 2. Build the HTTP client
/// 3. Fetch the page and its robots.txt
/// 4. Extract facts and probe links
/// 5. Produce recommendations
///
/// # Arguments
///
/// * `config` - The audit configuration
/// * `url` - The page to audit
///
/// # Returns
///
/// * `Ok(AuditReport)` - Audit completed
/// * `Err(AuditError)` - Invalid URL, or the page could not be fetched
pub async fn run_audit(config: &Config, url: &str) -> Result<AuditReport, AuditError> {
    Auditor::new(config.clone())?.audit(url).await
}
