use url::Url;

/// Resolves an href to an absolute URL
///
/// Returns None if the link should be dropped:
/// - empty and fragment-only hrefs (same-page anchors)
/// - javascript:, mailto:, tel: and data: schemes
/// - hrefs that fail to resolve against the base
/// - non-HTTP(S) URLs after resolution
///
/// # Examples
///
/// ```
/// use url::Url;
/// use seo_lens::url::resolve_link;
///
/// let base = Url::parse("https://example.com/blog/post").unwrap();
/// assert_eq!(
///     resolve_link("../about", &base).map(|u| u.to_string()),
///     Some("https://example.com/about".to_string())
/// );
/// assert_eq!(resolve_link("mailto:a@example.com", &base), None);
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    let absolute = base_url.join(href).ok()?;
    match absolute.scheme() {
        "http" | "https" if absolute.host_str().is_some() => Some(absolute),
        _ => None,
    }
}
