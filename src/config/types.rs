use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure for an audit
///
/// Every section is optional in TOML; missing values fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,

    #[serde(default)]
    pub audit: AuditSettings,

    /// Extra headers sent with every request (e.g. Accept-Language)
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct UserAgentConfig {
    /// Name of the auditing bot
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the auditing bot
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the bot
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `Name/Version` or `Name/Version (+ContactURL)`
    pub fn user_agent_string(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: None,
        }
    }
}

/// Audit behavior configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AuditSettings {
    /// Timeout applied to every outbound request (seconds)
    #[serde(rename = "timeout-seconds", default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Maximum number of links probed for their status code
    #[serde(rename = "probe-limit", default = "default_probe_limit")]
    pub probe_limit: usize,

    /// Maximum number of probes in flight at once
    #[serde(rename = "probe-concurrency", default = "default_probe_concurrency")]
    pub probe_concurrency: usize,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            probe_limit: default_probe_limit(),
            probe_concurrency: default_probe_concurrency(),
        }
    }
}

fn default_crawler_name() -> String {
    "SeoLens".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_probe_limit() -> usize {
    10
}

fn default_probe_concurrency() -> usize {
    5
}
