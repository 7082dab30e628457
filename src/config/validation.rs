use crate::config::types::{AuditSettings, Config, UserAgentConfig};
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};
use std::collections::BTreeMap;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_user_agent_config(&config.user_agent)?;
    validate_audit_settings(&config.audit)?;
    validate_headers(&config.headers)?;
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    if let Some(contact_url) = &config.contact_url {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}

/// Validates timeout and probe bounds
fn validate_audit_settings(config: &AuditSettings) -> Result<(), ConfigError> {
    if config.timeout_seconds < 1 || config.timeout_seconds > 120 {
        return Err(ConfigError::Validation(format!(
            "timeout_seconds must be between 1 and 120, got {}",
            config.timeout_seconds
        )));
    }

    if config.probe_limit > 1000 {
        return Err(ConfigError::Validation(format!(
            "probe_limit must be <= 1000, got {}",
            config.probe_limit
        )));
    }

    if config.probe_concurrency < 1 || config.probe_concurrency > 50 {
        return Err(ConfigError::Validation(format!(
            "probe_concurrency must be between 1 and 50, got {}",
            config.probe_concurrency
        )));
    }

    Ok(())
}

/// Validates that extra headers are legal HTTP header names and values
fn validate_headers(headers: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for (name, value) in headers {
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            ConfigError::Validation(format!("Invalid header name: '{}'", name))
        })?;
        HeaderValue::from_str(value).map_err(|_| {
            ConfigError::Validation(format!("Invalid value for header '{}'", name))
        })?;
    }
    Ok(())
}
