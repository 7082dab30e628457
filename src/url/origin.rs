use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

/// The authority a page belongs to: scheme, host and port
///
/// Ports are compared after applying the scheme default, so
/// `https://example.com` and `https://example.com:443` share an origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
    port: u16,
}

impl Origin {
    /// Extracts the origin of a URL
    ///
    /// Returns `None` for URLs without a host or a known port
    /// (e.g. `mailto:` or `data:` URLs).
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use seo_lens::url::Origin;
    ///
    /// let origin = Origin::of(&Url::parse("https://EXAMPLE.com/path").unwrap()).unwrap();
    /// assert_eq!(origin.to_string(), "https://example.com");
    /// ```
    pub fn of(url: &Url) -> Option<Self> {
        let host = url.host_str()?.to_lowercase();
        let port = url.port_or_known_default()?;
        Some(Self {
            scheme: url.scheme().to_string(),
            host,
            port,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Joins a root-relative path onto this origin
    ///
    /// Returns `None` if the origin cannot be expressed as a URL, which does
    /// not happen for origins built from a parsed http(s) URL.
    pub fn join(&self, path: &str) -> Option<Url> {
        Url::parse(&self.to_string()).ok()?.join(path).ok()
    }

    fn default_port(&self) -> Option<u16> {
        match self.scheme.as_str() {
            "http" => Some(80),
            "https" => Some(443),
            _ => None,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = if self.host.contains(':') {
            // IPv6 literal
            format!("[{}]", self.host.trim_matches(|c| c == '[' || c == ']'))
        } else {
            self.host.clone()
        };

        if self.default_port() == Some(self.port) {
            write!(f, "{}://{}", self.scheme, host)
        } else {
            write!(f, "{}://{}:{}", self.scheme, host, self.port)
        }
    }
}

impl Serialize for Origin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
