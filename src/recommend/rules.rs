use crate::audit::PageFacts;
use crate::recommend::{Recommendation, RecommendationKind, Severity};

/// Titles longer than this many characters are flagged
pub const MAX_TITLE_CHARS: usize = 60;

/// More external links than this are flagged
pub const MAX_EXTERNAL_LINKS: usize = 50;

/// Produces recommendations for a page
///
/// # Arguments
///
/// * `facts` - Facts extracted from the page
/// * `internal_count` - Number of internal links on the page
/// * `external_count` - Number of external links on the page
///
/// # Example
///
/// ```
/// use seo_lens::audit::extract_facts;
/// use seo_lens::recommend;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/").unwrap();
/// let facts = extract_facts(r#"<img src="a.png"><a href="/x">x</a>"#, &base);
/// let recs = recommend(&facts, facts.internal_links.len(), facts.external_links.len());
/// assert_eq!(recs.len(), 2); // missing description, missing alt on a.png
/// ```
pub fn recommend(
    facts: &PageFacts,
    internal_count: usize,
    external_count: usize,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(title) = &facts.title {
        let length = title.chars().count();
        if length > MAX_TITLE_CHARS {
            recommendations.push(Recommendation::new(
                RecommendationKind::TitleTooLong,
                Severity::Warning,
                format!(
                    "title exceeds {} characters ({} characters)",
                    MAX_TITLE_CHARS, length
                ),
            ));
        }
    }

    if facts.description.is_none() {
        recommendations.push(Recommendation::new(
            RecommendationKind::MissingDescription,
            Severity::Warning,
            "meta description is missing",
        ));
    }

    for image in facts.images_missing_alt() {
        let src = image.src.as_deref().unwrap_or("missing");
        recommendations.push(Recommendation::new(
            RecommendationKind::MissingImageAlt,
            Severity::Warning,
            format!("image {} has no alt text", src),
        ));
    }

    if internal_count == 0 {
        recommendations.push(Recommendation::new(
            RecommendationKind::NoInternalLinks,
            Severity::Warning,
            "no internal links found",
        ));
    }

    if external_count > MAX_EXTERNAL_LINKS {
        recommendations.push(Recommendation::new(
            RecommendationKind::ExcessiveExternalLinks,
            Severity::Info,
            format!("excessive external links ({})", external_count),
        ));
    }

    recommendations
}
