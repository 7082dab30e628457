//! Recommendation engine
//!
//! Applies a fixed rule table to extracted page facts. Every rule is
//! evaluated, in table order; an empty result means no issues were found.
//!
//! | Condition | Recommendation | Severity |
//! |-----------|----------------|----------|
//! | title longer than 60 characters | title exceeds 60 characters | warning |
//! | no meta description | meta description is missing | warning |
//! | image without `alt` | one per image, naming its source | warning |
//! | no internal links | no internal links found | warning |
//! | more than 50 external links | excessive external links | info |

mod rules;

pub use rules::{recommend, MAX_EXTERNAL_LINKS, MAX_TITLE_CHARS};

use serde::Serialize;
use std::fmt;

/// How urgent a recommendation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Which rule produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    TitleTooLong,
    MissingDescription,
    MissingImageAlt,
    NoInternalLinks,
    ExcessiveExternalLinks,
}

/// An advisory produced from page facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub severity: Severity,
    pub message: String,
}

impl Recommendation {
    pub(crate) fn new(kind: RecommendationKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
