//! HTML fact extraction
//!
//! This module turns a page body into [`PageFacts`]. Extraction never fails:
//! the HTML parser recovers from malformed markup, and elements that are
//! missing come back as `None` (or the documented default for the robots
//! directive).

use crate::url::{classify_link, resolve_link, LinkScope};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::collections::HashSet;
use url::Url;

/// Robots directive assumed when a page has no `<meta name="robots">`
pub const DEFAULT_ROBOTS_DIRECTIVE: &str = "index, follow";

/// A locale-specific alternate of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hreflang {
    pub locale: String,
    pub href: String,
}

/// An `<img>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    /// `src` attribute, None if absent
    pub src: Option<String>,

    /// `alt` attribute, None if absent. An empty `alt=""` is present.
    pub alt: Option<String>,
}

/// SEO-relevant facts extracted from one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFacts {
    /// The page title (from the first <title> tag)
    pub title: Option<String>,

    /// `<meta name="description">` content
    pub description: Option<String>,

    /// `<link rel="canonical">` href, as written in the page
    pub canonical: Option<String>,

    /// `<meta name="robots">` content, or [`DEFAULT_ROBOTS_DIRECTIVE`]
    pub robots_directive: String,

    /// `<link rel="alternate" hreflang>` entries in document order
    pub hreflangs: Vec<Hreflang>,

    /// All images in document order
    pub images: Vec<Image>,

    /// Raw text of every JSON-LD script block, unvalidated
    pub structured_data: Vec<String>,

    /// Distinct same-origin links, first-seen order
    pub internal_links: Vec<String>,

    /// Distinct cross-origin links, first-seen order
    pub external_links: Vec<String>,
}

impl PageFacts {
    /// Images that carry no `alt` attribute
    pub fn images_missing_alt(&self) -> impl Iterator<Item = &Image> {
        self.images.iter().filter(|image| image.alt.is_none())
    }

    /// Internal links followed by external links, the order links are probed in
    pub fn all_links(&self) -> Vec<String> {
        self.internal_links
            .iter()
            .chain(self.external_links.iter())
            .cloned()
            .collect()
    }
}

/// Parses HTML content and extracts page facts
///
/// # Link Extraction Rules
///
/// Every `<a href>` is resolved against `base_url`. Fragment-only anchors,
/// `javascript:`, `mailto:`, `tel:`, `data:` and anything that does not
/// resolve to an http(s) URL are dropped. The rest are split by exact
/// origin match into internal and external links; each link lands in
/// exactly one of the two lists.
///
/// # Example
///
/// ```
/// use seo_lens::audit::extract_facts;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let facts = extract_facts(html, &base_url);
/// assert_eq!(facts.title.as_deref(), Some("Test"));
/// assert_eq!(facts.internal_links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn extract_facts(html: &str, base_url: &Url) -> PageFacts {
    let document = Html::parse_document(html);
    let (internal_links, external_links) = extract_links(&document, base_url);

    PageFacts {
        title: extract_title(&document),
        description: meta_content(&document, "description"),
        canonical: extract_canonical(&document),
        robots_directive: meta_content(&document, "robots")
            .unwrap_or_else(|| DEFAULT_ROBOTS_DIRECTIVE.to_string()),
        hreflangs: extract_hreflangs(&document),
        images: extract_images(&document),
        structured_data: extract_structured_data(&document),
        internal_links,
        external_links,
    }
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = selector("title")?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Content of the first `<meta name=...>` whose name matches case-insensitively
fn meta_content(document: &Html, name: &str) -> Option<String> {
    let meta_selector = selector("meta[name][content]")?;

    document
        .select(&meta_selector)
        .find(|element| {
            element
                .value()
                .attr("name")
                .is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
        })
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// True if a space-separated `rel` attribute contains `wanted`
fn has_rel(element: &ElementRef, wanted: &str) -> bool {
    element
        .value()
        .attr("rel")
        .is_some_and(|rel| rel.split_ascii_whitespace().any(|r| r.eq_ignore_ascii_case(wanted)))
}

fn extract_canonical(document: &Html) -> Option<String> {
    let link_selector = selector("link[href]")?;

    document
        .select(&link_selector)
        .find(|element| has_rel(element, "canonical"))
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

fn extract_hreflangs(document: &Html) -> Vec<Hreflang> {
    let Some(link_selector) = selector("link[hreflang][href]") else {
        return Vec::new();
    };

    document
        .select(&link_selector)
        .filter(|element| has_rel(element, "alternate"))
        .filter_map(|element| {
            let locale = element.value().attr("hreflang")?.trim();
            let href = element.value().attr("href")?.trim();
            Some(Hreflang {
                locale: locale.to_string(),
                href: href.to_string(),
            })
        })
        .collect()
}

fn extract_images(document: &Html) -> Vec<Image> {
    let Some(img_selector) = selector("img") else {
        return Vec::new();
    };

    document
        .select(&img_selector)
        .map(|element| Image {
            src: element
                .value()
                .attr("src")
                .map(|src| src.trim().to_string())
                .filter(|src| !src.is_empty()),
            alt: element.value().attr("alt").map(|alt| alt.trim().to_string()),
        })
        .collect()
}

fn extract_structured_data(document: &Html) -> Vec<String> {
    let Some(script_selector) = selector("script[type]") else {
        return Vec::new();
    };

    document
        .select(&script_selector)
        .filter(|element| {
            element
                .value()
                .attr("type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("application/ld+json"))
        })
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}

/// Extracts and partitions all anchor links
fn extract_links(document: &Html, base_url: &Url) -> (Vec<String>, Vec<String>) {
    let mut internal = Vec::new();
    let mut external = Vec::new();
    let mut seen = HashSet::new();

    let Some(a_selector) = selector("a[href]") else {
        return (internal, external);
    };

    for element in document.select(&a_selector) {
        let Some(absolute) = element
            .value()
            .attr("href")
            .and_then(|href| resolve_link(href, base_url))
        else {
            continue;
        };

        let link = absolute.to_string();
        if !seen.insert(link.clone()) {
            continue;
        }

        match classify_link(base_url, &absolute) {
            LinkScope::Internal => internal.push(link),
            LinkScope::External => external.push(link),
        }
    }

    (internal, external)
}
