//! URL canonicalization.
//!
//! Input from clients is trimmed, given an explicit protocol when it has none,
//! validated as an absolute HTTP(S) URL and re-serialized by the `url` crate so
//! equivalent spellings (`EXAMPLE.com`, `https://example.com:443`) map to the
//! same stored string.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

/// Longest URL accepted for shortening, in characters of the submitted input.
///
/// Percent-encoding may make the canonical form longer; it is stored as is.
pub const MAX_URL_LENGTH: usize = 2048;

static PROTOCOL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid protocol regex"));

static ANY_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z][a-z0-9+.-]*://").expect("valid scheme regex"));

/// Errors that can occur during URL canonicalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is required")]
    Empty,

    #[error("URL must be at most {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Invalid host: {0}")]
    InvalidHost(String),
}

/// Canonicalizes a client-supplied URL.
///
/// # Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. `https://` is prepended when the input has no `http://` or `https://` prefix
/// 3. Only HTTP and HTTPS are accepted
/// 4. The host must be an IP address or a dotted domain name without underscores
///    or a trailing dot
/// 5. The `url` crate serialization is returned (lowercase host, default port
///    dropped, empty path becomes `/`)
///
/// # Errors
///
/// Returns [`UrlNormalizationError`] describing the first rule violated.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(canonicalize_url("  example.com ").unwrap(), "https://example.com/");
/// assert_eq!(
///     canonicalize_url("HTTP://EXAMPLE.COM:80/Path").unwrap(),
///     "http://example.com/Path"
/// );
/// ```
pub fn canonicalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }
    if trimmed.chars().count() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    let qualified = if PROTOCOL_REGEX.is_match(trimmed) {
        trimmed.to_string()
    } else if ANY_SCHEME_REGEX.is_match(trimmed) {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    } else {
        format!("https://{trimmed}")
    };

    let url =
        Url::parse(&qualified).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    match url.host() {
        Some(Host::Domain(domain)) => validate_domain(domain)?,
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
        None => return Err(UrlNormalizationError::InvalidHost(String::new())),
    }

    Ok(url.to_string())
}

fn validate_domain(domain: &str) -> Result<(), UrlNormalizationError> {
    let invalid = || UrlNormalizationError::InvalidHost(domain.to_string());

    if domain.contains('_') || domain.ends_with('.') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}
