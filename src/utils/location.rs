//! `Location` header resolution.

use url::Url;

/// Computes the next URL of a redirect chain.
///
/// # Rules
///
/// - `Location` starting with `/` replaces path, query and fragment of
///   `current` while keeping its scheme and host (port included)
/// - `Location` starting with `http` is taken verbatim as an absolute URL
/// - anything else is joined relative to `current`'s path
///
/// Returns `None` when `current` cannot be parsed or the relative join fails.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     resolve_location("https://bit.ly/abc", "/landing").unwrap(),
///     "https://bit.ly/landing"
/// );
/// assert_eq!(
///     resolve_location("https://a.com/x/y", "z").unwrap(),
///     "https://a.com/x/z"
/// );
/// ```
pub fn resolve_location(current: &str, location: &str) -> Option<String> {
    if location.starts_with("http") {
        return Some(location.to_string());
    }

    let base = Url::parse(current).ok()?;

    if location.starts_with('/') {
        let host = base.host_str()?;
        let origin = match base.port() {
            Some(port) => format!("{}://{}:{}", base.scheme(), host, port),
            None => format!("{}://{}", base.scheme(), host),
        };
        return Some(format!("{}{}", origin, location));
    }

    base.join(location).ok().map(String::from)
}
