//! HTTP layer for YouCan API communication.
//!
//! This module provides the request/response pipeline underneath
//! [`StoreClient`](crate::StoreClient): building routes, attaching the bearer
//! token, encoding bodies, and classifying responses.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async transport owning the session and token
//! - [`Route`]: A method plus a resolved URL
//! - [`ResponseBody`]: A JSON or raw text response body
//! - [`StoreError`]: A failed request, classified by [`StoreErrorKind`]
//! - [`ClientError`]: Unified error type for SDK operations
//! - [`to_json`]: The compact, ASCII-escaped body encoder
//!
//! # Example
//!
//! ```rust,ignore
//! use youcan_store::clients::{HttpClient, HttpMethod, Route};
//! use youcan_store::StoreConfig;
//!
//! let client = HttpClient::new(StoreConfig::default());
//! let route = Route::new(client.base_url(), HttpMethod::Get, "/stores")?;
//!
//! match client.request(&route, None).await {
//!     Ok(body) => println!("{body:?}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```
//!
//! # Failure Behavior
//!
//! Requests are never retried. Any status >= 400 and any connection failure
//! is returned as a [`StoreError`] inside [`ClientError::Store`].

mod errors;
mod http_client;
mod http_response;
mod json;
mod route;

pub use errors::{
    ClientError, StoreError, StoreErrorKind, CONNECTION_FAILED_DETAILS, NO_DETAILS,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::{is_json_content_type, ResponseBody, JSON_CONTENT_TYPE};
pub use json::to_json;
pub use route::{HttpMethod, PathParam, Route};
