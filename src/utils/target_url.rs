//! Validation of user-supplied preview targets.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Parses a URL the service is allowed to fetch.
///
/// # Rules
///
/// 1. **Format**: Must parse as an absolute URL
/// 2. **Protocol**: Only HTTP and HTTPS are allowed
/// 3. **Host**: Must be present
///
/// The input string itself is left untouched; callers keep using it for
/// comparisons so that `wasRedirected` reflects real redirects only.
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for malformed URLs.
/// Returns [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes such as
/// `javascript:`, `data:` or `file:`.
pub fn parse_target_url(input: &str) -> Result<Url, TargetUrlError> {
    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(TargetUrlError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_https() {
        let url = parse_target_url("https://example.com/article").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_parse_http_with_port() {
        let url = parse_target_url("http://localhost:8080/x").unwrap();
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_reject_relative() {
        assert!(matches!(
            parse_target_url("/just/a/path"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_reject_garbage() {
        assert!(matches!(
            parse_target_url("not a url"),
            Err(TargetUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_reject_javascript_scheme() {
        assert_eq!(
            parse_target_url("javascript:alert(1)"),
            Err(TargetUrlError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_reject_file_scheme() {
        assert_eq!(
            parse_target_url("file:///etc/passwd"),
            Err(TargetUrlError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_reject_ftp_scheme() {
        assert_eq!(
            parse_target_url("ftp://example.com/file"),
            Err(TargetUrlError::UnsupportedProtocol)
        );
    }
}
