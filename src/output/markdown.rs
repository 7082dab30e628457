//! Markdown report generation
//!
//! Renders an [`AuditReport`] as a human-readable markdown document. Missing
//! facts are printed with their sentinel names (`missing`, `alt missing`,
//! `none`, `absent`).

use crate::audit::AuditReport;

const MISSING: &str = "missing";
const ALT_MISSING: &str = "alt missing";

/// Formats an audit report as markdown
pub fn format_markdown_report(report: &AuditReport) -> String {
    let mut md = String::new();
    let facts = &report.facts;

    md.push_str(&format!("# SEO Audit: {}\n\n", report.url));

    // Fetch metadata
    md.push_str("## Page\n\n");
    md.push_str(&format!("- **URL**: {}\n", report.url));
    if report.final_url != report.url {
        md.push_str(&format!("- **Final URL**: {}\n", report.final_url));
    }
    md.push_str(&format!(
        "- **Audited**: {}\n",
        report.audited_at.to_rfc3339()
    ));
    match report.status_code {
        Some(code) => md.push_str(&format!("- **Status**: {}\n", code)),
        None => md.push_str("- **Status**: unknown\n"),
    }
    if let Some(content_type) = report.headers.get("content-type") {
        md.push_str(&format!("- **Content-Type**: {}\n", content_type));
    }
    md.push('\n');

    // Core facts
    md.push_str("## Metadata\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("|-------|-------|\n");
    md.push_str(&format!(
        "| Title | {} |\n",
        cell(facts.title.as_deref().unwrap_or(MISSING))
    ));
    md.push_str(&format!(
        "| Description | {} |\n",
        cell(facts.description.as_deref().unwrap_or(MISSING))
    ));
    md.push_str(&format!(
        "| Canonical | {} |\n",
        cell(facts.canonical.as_deref().unwrap_or(MISSING))
    ));
    md.push_str(&format!("| Robots | {} |\n\n", cell(&facts.robots_directive)));

    if !facts.hreflangs.is_empty() {
        md.push_str("## Hreflang Alternates\n\n");
        for hreflang in &facts.hreflangs {
            md.push_str(&format!("- `{}`: {}\n", hreflang.locale, hreflang.href));
        }
        md.push('\n');
    }

    // Images
    md.push_str(&format!("## Images ({})\n\n", facts.images.len()));
    if !facts.images.is_empty() {
        md.push_str("| Source | Alt |\n");
        md.push_str("|--------|-----|\n");
        for image in &facts.images {
            md.push_str(&format!(
                "| {} | {} |\n",
                cell(image.src.as_deref().unwrap_or(MISSING)),
                cell(image.alt.as_deref().unwrap_or(ALT_MISSING))
            ));
        }
        md.push('\n');
    }

    // Structured data
    md.push_str("## Structured Data\n\n");
    if facts.structured_data.is_empty() {
        md.push_str("none\n\n");
    } else {
        for block in &facts.structured_data {
            md.push_str("```json\n");
            md.push_str(block);
            md.push_str("\n```\n\n");
        }
    }

    // Links
    md.push_str("## Links\n\n");
    md.push_str(&format!("- **Internal**: {}\n", facts.internal_links.len()));
    md.push_str(&format!("- **External**: {}\n\n", facts.external_links.len()));

    if !report.link_statuses.is_empty() {
        md.push_str(&format!(
            "### Link Status ({} probed)\n\n",
            report.link_statuses.len()
        ));
        md.push_str("| URL | Status |\n");
        md.push_str("|-----|--------|\n");
        for (url, status) in &report.link_statuses {
            md.push_str(&format!("| {} | {} |\n", cell(url), status));
        }
        md.push('\n');
    }

    // Robots
    md.push_str("## robots.txt\n\n");
    match report.robots.text() {
        Some(text) => {
            if !report.robots_allowed {
                md.push_str("**This page is disallowed for the auditing bot.**\n\n");
            }
            md.push_str("```\n");
            md.push_str(text.trim_end());
            md.push_str("\n```\n\n");
        }
        None => md.push_str("absent\n\n"),
    }
    if let Some(delay) = report.crawl_delay {
        md.push_str(&format!("Crawl-delay: {} seconds\n\n", delay));
    }
    if !report.sitemaps.is_empty() {
        md.push_str("Sitemaps:\n\n");
        for sitemap in &report.sitemaps {
            md.push_str(&format!("- {}\n", sitemap));
        }
        md.push('\n');
    }

    // Recommendations
    md.push_str("## Recommendations\n\n");
    if report.recommendations.is_empty() {
        md.push_str("No issues found.\n\n");
    } else {
        for recommendation in &report.recommendations {
            md.push_str(&format!("- {}\n", recommendation));
        }
        md.push('\n');
    }

    if !report.tools.is_empty() {
        md.push_str("## External Tools\n\n");
        for tool in &report.tools {
            md.push_str(&format!("- [{}]({})\n", tool.name, tool.url));
        }
        md.push('\n');
    }

    md
}

/// Escapes a value for use inside a markdown table cell
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace(['\n', '\r'], " ")
}
