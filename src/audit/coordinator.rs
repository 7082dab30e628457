//! Audit coordinator - pipeline orchestration
//!
//! Data flows strictly forward: fetch → extract → {probe links, recommend}.
//! The coordinator holds the configuration and HTTP client and nothing
//! else; audits share no state.

use crate::audit::checker::{check_statuses, LinkStatus, LinkStatusMap};
use crate::audit::extractor::{extract_facts, PageFacts};
use crate::audit::fetcher::{build_http_client, fetch_page};
use crate::config::Config;
use crate::recommend::{recommend, Recommendation};
use crate::robots::{read_robots, RobotsTxt};
use crate::tools::{tool_links, ToolLink};
use crate::url::{parse_target_url, Origin};
use crate::AuditError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// Everything an audit found out about one page
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// The URL that was requested
    pub url: String,

    /// URL after redirects; links are resolved against it
    pub final_url: String,

    pub audited_at: DateTime<Utc>,

    /// HTTP status of the page (may be >= 400)
    pub status_code: Option<u16>,

    /// Response headers of the page
    pub headers: BTreeMap<String, String>,

    pub facts: PageFacts,

    /// Raw robots.txt of the page's origin
    pub robots: RobotsTxt,

    /// Whether robots.txt lets the configured bot fetch the page
    pub robots_allowed: bool,

    /// Crawl-delay robots.txt asks of the configured bot (seconds)
    pub crawl_delay: Option<f64>,

    /// Sitemaps declared in robots.txt
    pub sitemaps: Vec<String>,

    pub link_statuses: LinkStatusMap,

    pub recommendations: Vec<Recommendation>,

    pub tools: Vec<ToolLink>,
}

impl AuditReport {
    /// Links that answered with a 4xx/5xx status or failed outright
    pub fn broken_links(&self) -> impl Iterator<Item = (&String, &LinkStatus)> {
        self.link_statuses.iter().filter(|(_, status)| !status.is_ok())
    }
}

/// Runs audits with one configuration and HTTP client
pub struct Auditor {
    config: Config,
    client: Client,
}

impl Auditor {
    /// Creates a new auditor
    ///
    /// # Returns
    ///
    /// * `Ok(Auditor)` - Client built from the configuration
    /// * `Err(AuditError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, AuditError> {
        let client = build_http_client(&config)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Audits one page
    ///
    /// An invalid URL aborts before any request is sent. A page that cannot
    /// be fetched at all aborts with `FetchFailure`. HTTP error statuses,
    /// a missing robots.txt and failing link probes are all recorded in the
    /// report instead.
    pub async fn audit(&self, url: &str) -> Result<AuditReport, AuditError> {
        let target = parse_target_url(url)?;
        tracing::info!("Auditing {}", target);

        let fetched = fetch_page(&self.client, target.as_str()).await?;
        let Some(body) = fetched.body.as_deref() else {
            let message = fetched
                .error
                .clone()
                .unwrap_or_else(|| "no body received".to_string());
            tracing::error!("Could not fetch {}: {}", target, message);
            return Err(AuditError::FetchFailure {
                url: target.to_string(),
                message,
            });
        };

        if fetched.is_http_error() {
            tracing::warn!(
                "{} answered HTTP {}, auditing the error page",
                target,
                fetched.status_code.unwrap_or_default()
            );
        }

        let base = fetched
            .final_url
            .as_deref()
            .and_then(|u| Url::parse(u).ok())
            .unwrap_or_else(|| target.clone());

        let robots = match Origin::of(&target) {
            Some(origin) => read_robots(&self.client, &origin).await,
            None => RobotsTxt::Absent,
        };
        let parsed_robots = robots.parse();
        let robots_allowed =
            parsed_robots.is_allowed(target.as_str(), &self.config.user_agent.crawler_name);
        if !robots_allowed {
            tracing::warn!("robots.txt disallows {} for this bot", target);
        }

        let facts = extract_facts(body, &base);
        tracing::info!(
            "Extracted {} internal and {} external links, {} images",
            facts.internal_links.len(),
            facts.external_links.len(),
            facts.images.len()
        );

        let link_statuses = check_statuses(
            &self.client,
            &facts.all_links(),
            self.config.audit.probe_limit,
            self.config.audit.probe_concurrency,
        )
        .await;

        let recommendations = recommend(
            &facts,
            facts.internal_links.len(),
            facts.external_links.len(),
        );
        tracing::info!("{} recommendations", recommendations.len());

        Ok(AuditReport {
            url: target.to_string(),
            final_url: base.to_string(),
            audited_at: Utc::now(),
            status_code: fetched.status_code,
            headers: fetched.headers.clone(),
            facts,
            robots,
            robots_allowed,
            crawl_delay: parsed_robots.crawl_delay(&self.config.user_agent.crawler_name),
            sitemaps: parsed_robots.sitemaps(),
            link_statuses,
            recommendations,
            tools: tool_links(&target),
        })
    }
}
