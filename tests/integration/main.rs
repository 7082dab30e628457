//! Integration tests for SEO-Lens
//!
//! These tests use wiremock to stand up mock HTTP servers and run the audit
//! pipeline end-to-end.

mod audit_tests;
mod fetch_tests;
mod probe_tests;

use seo_lens::config::{AuditSettings, Config, UserAgentConfig};
use std::collections::BTreeMap;

/// Creates a test configuration with a short timeout and the given probe limit
pub fn create_test_config(probe_limit: usize) -> Config {
    Config {
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: None,
        },
        audit: AuditSettings {
            timeout_seconds: 5,
            probe_limit,
            probe_concurrency: 4,
        },
        headers: BTreeMap::new(),
    }
}

/// Returns a URL on a local port nothing is listening on
pub fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

/// Counts requests with the given method received by a mock server
pub async fn count_requests(server: &wiremock::MockServer, method: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.to_string() == method)
        .count()
}
