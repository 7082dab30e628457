//! URL handling module for SEO-Lens
//!
//! This module validates audit targets, resolves hrefs found in a page, and
//! decides whether a resolved link is internal or external to the page.

mod origin;
mod resolve;
mod target;

pub use origin::Origin;
pub use resolve::resolve_link;
pub use target::parse_target_url;

use url::Url;

/// Which side of the internal/external split a link falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkScope {
    /// Same origin (scheme, host and port) as the audited page
    Internal,
    /// Any other origin
    External,
}

/// Classifies a resolved link relative to the audited page
///
/// Membership is exact origin equality. A link to `https://example.com.evil.net/`
/// is external to `https://example.com/` even though the base URL is a
/// substring of it.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use seo_lens::url::{classify_link, LinkScope};
///
/// let base = Url::parse("https://example.com/page").unwrap();
/// let link = Url::parse("https://example.com/about").unwrap();
/// assert_eq!(classify_link(&base, &link), LinkScope::Internal);
///
/// let link = Url::parse("https://example.com.evil.net/").unwrap();
/// assert_eq!(classify_link(&base, &link), LinkScope::External);
/// ```
pub fn classify_link(base: &Url, link: &Url) -> LinkScope {
    match (Origin::of(base), Origin::of(link)) {
        (Some(a), Some(b)) if a == b => LinkScope::Internal,
        _ => LinkScope::External,
    }
}
