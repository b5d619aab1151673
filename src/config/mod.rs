//! Configuration types for the YouCan store SDK.
//!
//! # Overview
//!
//! - [`StoreConfig`]: The configuration consumed by the transport
//! - [`StoreConfigBuilder`]: A builder for constructing [`StoreConfig`] instances
//! - [`BaseUrl`]: A validated API base URL
//! - [`BearerToken`]: A non-empty token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use youcan_store::{BaseUrl, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("https://api.youcan.shop").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.youcan.shop");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, BearerToken, DEFAULT_BASE_URL};

/// Configuration for the YouCan store SDK.
///
/// Every field has a default, so `StoreConfig::default()` targets the
/// production API with reqwest's default pool settings.
#[derive(Clone, Debug, Default)]
pub struct StoreConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    pool_max_idle_per_host: Option<usize>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the maximum number of idle pooled connections per host, if
    /// configured.
    #[must_use]
    pub const fn pool_max_idle_per_host(&self) -> Option<usize> {
        self.pool_max_idle_per_host
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for constructing [`StoreConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `https://api.youcan.shop`
/// - `user_agent_prefix`: `None`
/// - `pool_max_idle_per_host`: `None` (reqwest default)
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    pool_max_idle_per_host: Option<usize>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (e.g. a staging host or a local mock server).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Caps the number of idle connections kept in the pool per host.
    #[must_use]
    pub const fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = Some(max);
        self
    }

    /// Builds the [`StoreConfig`].
    ///
    /// All values are validated by their newtypes, so building cannot fail.
    #[must_use]
    pub fn build(self) -> StoreConfig {
        StoreConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            pool_max_idle_per_host: self.pool_max_idle_per_host,
        }
    }
}
