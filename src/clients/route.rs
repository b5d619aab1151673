//! Request targets for the YouCan API.
//!
//! A [`Route`] pairs an [`HttpMethod`] with a fully resolved URL. Routes are
//! built from a base URL, a path template with `{name}` placeholders, and
//! named [`PathParam`] values.
//!
//! # Example
//!
//! ```rust
//! use youcan_store::{BaseUrl, HttpMethod, Route};
//!
//! let route = Route::build(
//!     &BaseUrl::default(),
//!     HttpMethod::Put,
//!     "/orders/{order_id}/fulfill",
//!     &[("order_id", "ord 1".into())],
//! )
//! .unwrap();
//!
//! assert_eq!(route.url(), "https://api.youcan.shop/orders/ord%201/fulfill");
//! ```

use std::fmt;

use crate::config::BaseUrl;
use crate::error::ConfigError;

/// HTTP methods used by the YouCan API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A value substituted into a route template.
///
/// Text is percent-encoded before substitution; numbers are written
/// verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathParam {
    /// A string parameter (percent-encoded, `/` preserved).
    Text(String),
    /// A numeric parameter (substituted as-is).
    Number(i64),
}

impl PathParam {
    fn render(&self) -> String {
        match self {
            Self::Text(value) => encode_path_segment(value),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl From<&str> for PathParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PathParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for PathParam {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for PathParam {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

/// A resolved request target: method, path template and URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    method: HttpMethod,
    path: String,
    url: String,
    sensitive: bool,
}

impl Route {
    /// Creates a route for a path with no placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `path` contains placeholders or unbalanced
    /// braces.
    pub fn new(base: &BaseUrl, method: HttpMethod, path: &str) -> Result<Self, ConfigError> {
        Self::build(base, method, path, &[])
    }

    /// Resolves `template` against `base`, substituting named parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingPathParameter`] if the template names a
    /// parameter absent from `params`, or
    /// [`ConfigError::InvalidPathTemplate`] if the braces are unbalanced.
    pub fn build(
        base: &BaseUrl,
        method: HttpMethod,
        template: &str,
        params: &[(&str, PathParam)],
    ) -> Result<Self, ConfigError> {
        let resolved = resolve_template(template, params)?;
        Ok(Self {
            method,
            path: template.to_string(),
            url: format!("{}{resolved}", base.as_ref()),
            sensitive: false,
        })
    }

    /// Appends a form-encoded query pair (spaces become `+`).
    #[must_use]
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        self.url = format!(
            "{}{separator}{}={}",
            self.url,
            encode_query_component(key),
            encode_query_component(value)
        );
        self
    }

    /// Marks the request body as sensitive so it is left out of logs.
    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Returns `true` if the request body must not be logged.
    #[must_use]
    pub const fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the unresolved path template.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the fully resolved URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn resolve_template(template: &str, params: &[(&str, PathParam)]) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidPathTemplate {
        template: template.to_string(),
    };

    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(['{', '}']) {
        let (literal, tail) = rest.split_at(open);
        resolved.push_str(literal);

        if tail.starts_with('}') {
            return Err(invalid());
        }

        let close = tail.find('}').ok_or_else(invalid)?;
        let name = &tail[1..close];
        if name.is_empty() || name.contains('{') {
            return Err(invalid());
        }

        let (_, value) = params
            .iter()
            .find(|(key, _)| *key == name)
            .ok_or_else(|| ConfigError::MissingPathParameter {
                name: name.to_string(),
                template: template.to_string(),
            })?;
        resolved.push_str(&value.render());

        rest = &tail[close + 1..];
    }

    resolved.push_str(rest);
    Ok(resolved)
}

/// Percent-encodes a path value, leaving `/` intact.
fn encode_path_segment(value: &str) -> String {
    urlencoding::encode(value).replace("%2F", "/")
}

/// Form-encodes a query component (`+` for spaces).
fn encode_query_component(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Route>();
    assert_send_sync::<HttpMethod>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseUrl {
        BaseUrl::default()
    }

    #[test]
    fn test_http_method_display_is_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_route_without_params_appends_path() {
        let route = Route::new(&base(), HttpMethod::Post, "/auth/login").unwrap();

        assert_eq!(route.method(), HttpMethod::Post);
        assert_eq!(route.path(), "/auth/login");
        assert_eq!(route.url(), "https://api.youcan.shop/auth/login");
        assert!(!route.is_sensitive());
    }

    #[test]
    fn test_sensitive_marks_route() {
        let route = Route::new(&base(), HttpMethod::Post, "/auth/login")
            .unwrap()
            .sensitive();
        assert!(route.is_sensitive());
    }

    #[test]
    fn test_text_params_are_percent_encoded() {
        let route = Route::build(
            &base(),
            HttpMethod::Get,
            "/stores/{slug}",
            &[("slug", "my store&co".into())],
        )
        .unwrap();

        assert_eq!(route.url(), "https://api.youcan.shop/stores/my%20store%26co");
    }

    #[test]
    fn test_text_params_keep_slashes() {
        let route = Route::build(
            &base(),
            HttpMethod::Get,
            "/files/{key}",
            &[("key", "a/b c".into())],
        )
        .unwrap();

        assert_eq!(route.url(), "https://api.youcan.shop/files/a/b%20c");
    }

    #[test]
    fn test_numeric_params_are_verbatim() {
        let route = Route::build(
            &base(),
            HttpMethod::Put,
            "/orders/{order_id}/fulfill",
            &[("order_id", 42_i64.into())],
        )
        .unwrap();

        assert_eq!(route.url(), "https://api.youcan.shop/orders/42/fulfill");
    }

    #[test]
    fn test_multiple_params_in_one_template() {
        let route = Route::build(
            &base(),
            HttpMethod::Get,
            "/stores/{store}/products/{id}",
            &[("id", 7_u32.into()), ("store", "shop".into())],
        )
        .unwrap();

        assert_eq!(route.url(), "https://api.youcan.shop/stores/shop/products/7");
    }

    #[test]
    fn test_missing_param_is_config_error() {
        let result = Route::build(&base(), HttpMethod::Get, "/orders/{order_id}", &[]);

        assert!(matches!(
            result,
            Err(ConfigError::MissingPathParameter { name, .. }) if name == "order_id"
        ));
    }

    #[test]
    fn test_unbalanced_braces_are_rejected() {
        for template in ["/orders/{order_id", "/orders/}", "/orders/{}"] {
            let result = Route::build(&base(), HttpMethod::Get, template, &[]);
            assert!(
                matches!(result, Err(ConfigError::InvalidPathTemplate { .. })),
                "template {template} should be rejected"
            );
        }
    }

    #[test]
    fn test_with_query_form_encodes_value() {
        let route = Route::new(&base(), HttpMethod::Get, "/orders")
            .unwrap()
            .with_query("q", "jane doe/#12");

        assert_eq!(route.url(), "https://api.youcan.shop/orders?q=jane+doe%2F%2312");
    }

    #[test]
    fn test_with_query_appends_with_ampersand() {
        let route = Route::new(&base(), HttpMethod::Get, "/orders")
            .unwrap()
            .with_query("q", "a")
            .with_query("page", "2");

        assert_eq!(route.url(), "https://api.youcan.shop/orders?q=a&page=2");
    }
}
