//! Known URL shortener hosts.

use url::Url;

/// Hosts that are known to answer with short redirecting URLs.
pub const DEFAULT_SHORTENER_DOMAINS: &[&str] = &[
    "t.co",
    "bit.ly",
    "tinyurl.com",
    "goo.gl",
    "ow.ly",
    "buff.ly",
    "short.link",
    "is.gd",
    "v.gd",
    "cutt.ly",
    "rebrand.ly",
];

/// Immutable set of shortener host fragments.
///
/// Built once from configuration at startup and shared read-only by every
/// request. Classification is a case-insensitive substring match against the
/// URL hostname, so `bit.ly` also matches `www.bit.ly`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenerDomains {
    domains: Vec<String>,
}

impl ShortenerDomains {
    /// Creates a set from arbitrary host fragments.
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = domains
            .into_iter()
            .map(|d| d.as_ref().trim().to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();

        Self { domains }
    }

    /// Parses a comma-separated list (`"bit.ly, t.co"`).
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    /// Returns `true` if the hostname of `url` contains any known shortener.
    ///
    /// Unparseable URLs and URLs without a host are never shorteners.
    pub fn is_shortener(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };

        let Some(host) = parsed.host_str() else {
            return false;
        };

        let host = host.to_ascii_lowercase();
        self.domains.iter().any(|d| host.contains(d.as_str()))
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for ShortenerDomains {
    fn default() -> Self {
        Self::new(DEFAULT_SHORTENER_DOMAINS)
    }
}
