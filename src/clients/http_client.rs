//! HTTP transport for YouCan API communication.
//!
//! This module provides the [`HttpClient`] type, the single point of
//! outbound HTTP traffic. It owns the pooled connection session and the
//! bearer token, and turns every response into either a [`ResponseBody`]
//! or a typed [`StoreError`].

use std::sync::{PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde_json::{Map, Value};

use crate::clients::errors::{ClientError, StoreError};
use crate::clients::http_response::{ResponseBody, JSON_CONTENT_TYPE};
use crate::clients::json::to_json;
use crate::clients::route::Route;
use crate::config::{BaseUrl, BearerToken, StoreConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the YouCan API.
///
/// The client handles:
/// - Lazy creation of a pooled `reqwest::Client` (the session)
/// - `Authorization: Bearer` injection from the current token
/// - Compact, ASCII-escaped JSON request bodies
/// - Status code classification into [`StoreError`]
///
/// No retries are attempted; every failure is returned to the caller.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The token is read once per request when
/// headers are built, so a concurrent [`set_token`](Self::set_token) applies
/// to the next request that starts after it.
///
/// # Example
///
/// ```rust,ignore
/// use youcan_store::{BearerToken, HttpClient, HttpMethod, Route, StoreConfig};
///
/// let client = HttpClient::new(StoreConfig::default());
/// client.set_token(BearerToken::new("token")?);
///
/// let route = Route::new(client.base_url(), HttpMethod::Get, "/stores")?;
/// let body = client.request(&route, None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    config: StoreConfig,
    user_agent: String,
    /// The pooled reqwest client, created on first use.
    session: RwLock<Option<reqwest::Client>>,
    token: RwLock<Option<BearerToken>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl HttpClient {
    /// Creates a new transport. No connection is opened until the first
    /// request or an explicit [`start_session`](Self::start_session).
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}YouCan Store SDK v{SDK_VERSION} | Rust {rust_version}");

        Self {
            config,
            user_agent,
            session: RwLock::new(None),
            token: RwLock::new(None),
        }
    }

    /// Returns the configuration this transport was built with.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the base URL routes should be resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.config.base_url()
    }

    /// Returns the `User-Agent` header sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sets the bearer token used by all subsequent requests.
    pub fn set_token(&self, token: BearerToken) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Removes the bearer token; later requests are sent unauthenticated.
    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns the current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<BearerToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` if a session is currently open.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Opens the pooled connection session. Calling it again while a
    /// session is open does nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] of kind `ServerError` if the underlying
    /// client cannot be initialized (e.g. TLS backend failure).
    pub fn start_session(&self) -> Result<(), StoreError> {
        self.session().map(|_| ())
    }

    /// Releases the session and its pooled connections. Safe to call when no
    /// session is open.
    pub fn close(&self) {
        let closed = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if closed.is_some() {
            tracing::debug!("Closed HTTP session for {}", self.base_url());
        }
    }

    /// Sends a request and classifies the response.
    ///
    /// A session is opened on demand if none is open. When the response
    /// declares `application/json` its body is decoded, otherwise the raw
    /// text is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Store`] for any status >= 400 (classified by
    /// [`StoreError::from_response`]) and for connection failures (status
    /// 500, `Request Failed`). Returns [`ClientError::Encode`] if `body`
    /// cannot be serialized and [`ClientError::Config`] if the token cannot
    /// be sent as a header.
    pub async fn request(
        &self,
        route: &Route,
        body: Option<&Value>,
    ) -> Result<ResponseBody, ClientError> {
        let headers = self.build_headers(body.is_some())?;
        let payload = body.map(to_json).transpose()?;
        let session = self.session()?;

        let mut builder = session
            .request(route.method().into(), route.url())
            .headers(headers);
        if let Some(payload) = &payload {
            builder = builder.body(payload.clone());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!("Request failed: {}", error);
                return Err(StoreError::connection_failed().into());
            }
        };

        let status = response.status().as_u16();
        let logged_body = if route.is_sensitive() {
            "<redacted>"
        } else {
            payload.as_deref().unwrap_or("no body")
        };
        tracing::debug!(
            "{} {} with {} has returned {}",
            route.method(),
            route.url(),
            logged_body,
            status
        );

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let text = response.text().await.map_err(|error| {
            tracing::error!("Request failed: {}", error);
            StoreError::connection_failed()
        })?;
        let parsed = ResponseBody::parse(content_type.as_deref(), text);

        if status >= 400 {
            let empty = Map::new();
            let error_body = match &parsed {
                ResponseBody::Json(Value::Object(map)) => map,
                _ => &empty,
            };
            return Err(StoreError::from_response(status, error_body).into());
        }

        Ok(parsed)
    }

    /// Builds the headers for one request from the current token.
    fn build_headers(&self, has_body: bool) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if let Ok(user_agent) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, user_agent);
        }

        if let Some(token) = self.token() {
            let mut value = HeaderValue::from_str(&token.header_value())
                .map_err(|_| ConfigError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        Ok(headers)
    }

    /// Returns a handle to the open session, opening one if needed.
    fn session(&self) -> Result<reqwest::Client, StoreError> {
        let existing = self
            .session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(client) = existing {
            return Ok(client);
        }

        let mut slot = self.session.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(max_idle) = self.config.pool_max_idle_per_host() {
            builder = builder.pool_max_idle_per_host(max_idle);
        }
        let client = builder.build().map_err(|error| {
            tracing::error!("Failed to create HTTP session: {}", error);
            StoreError::connection_failed()
        })?;

        tracing::debug!("Opened HTTP session for {}", self.base_url());
        *slot = Some(client.clone());
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> HttpClient {
        HttpClient::new(StoreConfig::default())
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();

        assert!(client.user_agent().contains("YouCan Store SDK v"));
        assert!(client.user_agent().contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StoreConfig::builder().user_agent_prefix("MyApp/1.0").build();
        let client = HttpClient::new(config);

        assert!(client.user_agent().starts_with("MyApp/1.0 | "));
        assert!(client.user_agent().contains("YouCan Store SDK"));
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let client = create_test_client();
        let headers = client.build_headers(false).unwrap();

        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(headers.get(CONTENT_TYPE).is_none());
        assert_eq!(headers.get(ACCEPT).unwrap(), JSON_CONTENT_TYPE);
    }

    #[test]
    fn test_authorization_header_uses_latest_token() {
        let client = create_test_client();
        client.set_token(BearerToken::new("first").unwrap());
        client.set_token(BearerToken::new("second").unwrap());

        let headers = client.build_headers(false).unwrap();
        let values: Vec<_> = headers.get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "Bearer second");
    }

    #[test]
    fn test_clear_token_removes_authorization_header() {
        let client = create_test_client();
        client.set_token(BearerToken::new("token").unwrap());
        client.clear_token();

        assert!(client.token().is_none());
        assert!(client.build_headers(false).unwrap().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_content_type_only_with_body() {
        let client = create_test_client();
        let headers = client.build_headers(true).unwrap();

        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
    }

    #[test]
    fn test_session_is_lazy() {
        let client = create_test_client();
        assert!(!client.has_session());
    }

    #[test]
    fn test_start_session_is_idempotent() {
        let client = create_test_client();

        client.start_session().unwrap();
        client.start_session().unwrap();
        assert!(client.has_session());
    }

    #[test]
    fn test_close_without_session_is_safe() {
        let client = create_test_client();
        client.close();
        client.close();
        assert!(!client.has_session());
    }

    #[test]
    fn test_close_releases_session() {
        let client = create_test_client();
        client.start_session().unwrap();
        client.close();
        assert!(!client.has_session());
    }

    #[test]
    fn test_base_url_comes_from_config() {
        let config = StoreConfig::builder()
            .base_url(BaseUrl::new("http://localhost:9999").unwrap())
            .build();
        let client = HttpClient::new(config);

        assert_eq!(client.base_url().as_ref(), "http://localhost:9999");
    }
}
