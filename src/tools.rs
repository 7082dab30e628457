//! Links to third-party SEO tools for the audited page
//!
//! The auditor only looks at static HTML. These tools cover what it does
//! not: rendering performance, rich-result eligibility, markup validity.

use serde::Serialize;
use url::Url;

/// A ready-to-open link to an external checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolLink {
    pub name: &'static str,
    pub url: String,
}

/// (name, endpoint, query parameter receiving the audited URL)
const TOOLS: &[(&str, &str, &str)] = &[
    (
        "PageSpeed Insights",
        "https://pagespeed.web.dev/analysis",
        "url",
    ),
    (
        "Rich Results Test",
        "https://search.google.com/test/rich-results",
        "url",
    ),
    (
        "W3C Markup Validator",
        "https://validator.w3.org/nu/",
        "doc",
    ),
    ("Schema Markup Validator", "https://validator.schema.org/", "url"),
];

/// Builds tool links for a page, with the page URL percent-encoded into
/// each tool's query string
///
/// # Example
///
/// ```
/// use seo_lens::tools::tool_links;
/// use url::Url;
///
/// let links = tool_links(&Url::parse("https://example.com/a?b=c").unwrap());
/// assert_eq!(
///     links[0].url,
///     "https://pagespeed.web.dev/analysis?url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc"
/// );
/// ```
pub fn tool_links(page: &Url) -> Vec<ToolLink> {
    TOOLS
        .iter()
        .filter_map(|&(name, endpoint, param)| {
            let mut url = Url::parse(endpoint).ok()?;
            url.query_pairs_mut().append_pair(param, page.as_str());
            Some(ToolLink {
                name,
                url: url.to_string(),
            })
        })
        .collect()
}
