//! High-level client for the YouCan store API.
//!
//! [`StoreClient`] composes the [`HttpClient`] transport with the entity
//! parsers: each operation resolves a [`Route`], sends it, and materializes
//! the JSON response into a typed record.
//!
//! # Example
//!
//! ```rust,ignore
//! use youcan_store::StoreClient;
//!
//! let client = StoreClient::new();
//! let shop = client.login("owner@example.com", "password").await?;
//!
//! // login stores the returned token for later calls
//! let products = client.get_products().await?;
//! println!("{} products across {} stores", products.len(), shop.total_stores());
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ClientError, HttpClient, HttpMethod, ResponseBody, Route, StoreError};
use crate::config::{BearerToken, StoreConfig};
use crate::entities::{ParseError, ProductList, Shop, StoreList};

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct FulfillBody<'a> {
    seller_note: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tracking_number: Option<&'a str>,
}

/// Client for the YouCan store API.
///
/// # Thread Safety
///
/// `StoreClient` is `Send + Sync` and can be shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct StoreClient {
    http: HttpClient,
}

// Verify StoreClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreClient>();
};

impl StoreClient {
    /// Creates a client for the production API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client with a custom configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Sets the bearer token for all subsequent requests.
    ///
    /// The token type is always `Bearer`; pass the raw token only.
    pub fn set_token(&self, token: BearerToken) {
        self.http.set_token(token);
    }

    /// Opens the pooled HTTP session ahead of the first request.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the HTTP client cannot be initialized.
    pub fn start_session(&self) -> Result<(), StoreError> {
        self.http.start_session()
    }

    /// Closes the HTTP session. Safe to call at any time.
    pub fn close(&self) {
        self.http.close();
    }

    /// Logs in with the store owner's credentials.
    ///
    /// On success the returned token is installed on the client, so later
    /// calls are authenticated. A token that cannot be sent as a header is
    /// not installed; the [`Shop`] is still returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Store`] if the API rejects the credentials or
    /// cannot be reached, and [`ClientError::Parse`] if the response does
    /// not describe a [`Shop`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Shop, ClientError> {
        let route = Route::new(self.http.base_url(), HttpMethod::Post, "/auth/login")?.sensitive();
        let body = serde_json::to_value(LoginBody { email, password })?;

        let response = self.http.request(&route, Some(&body)).await?;
        let shop = Shop::from_json(&expect_json(response, "Shop")?)?;

        match BearerToken::new(shop.token.clone()) {
            Ok(token) => self.http.set_token(token),
            Err(error) => tracing::debug!("Login token was not installed: {}", error),
        }
        tracing::debug!("Logged in with {} stores", shop.total_stores());
        Ok(shop)
    }

    /// Lists every store of the account, active or not.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the payload is not a
    /// store listing.
    pub async fn get_stores(&self) -> Result<StoreList, ClientError> {
        let route = Route::new(self.http.base_url(), HttpMethod::Get, "/stores")?;
        let response = self.http.request(&route, None).await?;
        Ok(StoreList::from_json(&expect_json(response, "StoreList")?)?)
    }

    /// Lists the products of the current store.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or a product is
    /// malformed.
    pub async fn get_products(&self) -> Result<ProductList, ClientError> {
        let route = Route::new(self.http.base_url(), HttpMethod::Get, "/products")?;
        let response = self.http.request(&route, None).await?;
        Ok(ProductList::from_json(&expect_json(response, "ProductList")?)?)
    }

    /// Searches orders by a free-text term.
    ///
    /// Orders have no typed record yet, so the raw JSON is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response is not
    /// JSON.
    pub async fn search_orders(&self, search_term: &str) -> Result<Value, ClientError> {
        let route = Route::new(self.http.base_url(), HttpMethod::Get, "/orders")?
            .with_query("q", search_term);
        let response = self.http.request(&route, None).await?;
        Ok(expect_json(response, "OrderSearch")?)
    }

    /// Marks an order as fulfilled.
    ///
    /// `order_id` is the order identifier, not its reference number.
    /// `tracking_number` is omitted from the body when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn order_fulfill(
        &self,
        order_id: &str,
        seller_note: &str,
        tracking_number: Option<&str>,
    ) -> Result<ResponseBody, ClientError> {
        let route = Route::build(
            self.http.base_url(),
            HttpMethod::Put,
            "/orders/{order_id}/fulfill",
            &[("order_id", order_id.into())],
        )?;
        let body = serde_json::to_value(FulfillBody {
            seller_note,
            tracking_number,
        })?;
        self.http.request(&route, Some(&body)).await
    }
}

fn expect_json(body: ResponseBody, entity: &'static str) -> Result<Value, ParseError> {
    body.into_json()
        .ok_or(ParseError::UnexpectedBody { entity })
}
