//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so invalid values
//! never reach the transport.

use crate::error::ConfigError;
use std::fmt;

/// Default base URL of the YouCan API.
pub const DEFAULT_BASE_URL: &str = "https://api.youcan.shop";

/// A validated API base URL.
///
/// The URL must use the `http` or `https` scheme and carry a host. A
/// trailing `/` is stripped so route paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use youcan_store::BaseUrl;
///
/// let url = BaseUrl::new("https://api.youcan.shop/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.youcan.shop");
/// assert_eq!(url.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme is not
    /// `http`/`https` or the host is missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
        if !matches!(scheme, "http" | "https") {
            return Err(invalid());
        }

        let host = rest.split([':', '/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() {
            return Err(invalid());
        }

        let scheme_end = scheme.len();
        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            scheme_end: "https".len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A non-empty bearer token.
///
/// The `Debug` implementation masks the value so tokens never end up in
/// logs.
///
/// # Example
///
/// ```rust
/// use youcan_store::BearerToken;
///
/// let token = BearerToken::new("secret-token").unwrap();
/// assert_eq!(token.as_ref(), "secret-token");
/// assert_eq!(format!("{:?}", token), "BearerToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a new validated bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty or blank,
    /// or [`ConfigError::InvalidToken`] if it contains control characters.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        if token.chars().any(char::is_control) {
            return Err(ConfigError::InvalidToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_https() {
        let url = BaseUrl::new("https://api.youcan.shop").unwrap();
        assert_eq!(url.as_ref(), "https://api.youcan.shop");
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_base_url_accepts_http_with_port() {
        let url = BaseUrl::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        let result = BaseUrl::new("api.youcan.shop");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_rejects_other_schemes() {
        let result = BaseUrl::new("ftp://api.youcan.shop");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_rejects_empty_host() {
        let result = BaseUrl::new("https://");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_default_is_youcan_api() {
        assert_eq!(BaseUrl::default().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(BaseUrl::default(), BaseUrl::new(DEFAULT_BASE_URL).unwrap());
    }

    #[test]
    fn test_bearer_token_rejects_blank() {
        assert!(matches!(BearerToken::new(""), Err(ConfigError::EmptyToken)));
        assert!(matches!(BearerToken::new("   "), Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn test_bearer_token_rejects_control_characters() {
        assert!(matches!(
            BearerToken::new("abc\r\nX-Injected: 1"),
            Err(ConfigError::InvalidToken)
        ));
    }

    #[test]
    fn test_bearer_token_header_value() {
        let token = BearerToken::new("abc").unwrap();
        assert_eq!(token.header_value(), "Bearer abc");
    }

    #[test]
    fn test_bearer_token_debug_is_masked() {
        let token = BearerToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
    }
}
