//! Error types for YouCan API requests.
//!
//! Failed requests are reported as a single [`StoreError`] whose
//! [`StoreErrorKind`] is derived from the HTTP status code:
//!
//! | Status | Kind | Error label |
//! |---|---|---|
//! | 402 | [`StoreErrorKind::ClosedStore`] | `Store Closed` |
//! | 404 | [`StoreErrorKind::NotFound`] | `Not Found` |
//! | 422 | [`StoreErrorKind::ValidationError`] | `Validation Error` |
//! | other >= 400 | [`StoreErrorKind::Generic`] | body `error`, or `Unknown error` |
//! | connection failure | [`StoreErrorKind::ServerError`] | `Request Failed` |
//!
//! Callers can match on the kind, or treat every failure alike through the
//! shared `status`, `error` and `details` fields. [`ClientError`] unifies
//! request failures with configuration and payload parsing failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use youcan_store::{ClientError, StoreErrorKind};
//!
//! match client.login("owner@example.com", "password").await {
//!     Ok(shop) => println!("{} stores", shop.total_stores()),
//!     Err(ClientError::Store(e)) if e.kind == StoreErrorKind::ClosedStore => {
//!         println!("store closed: {}", e.details);
//!     }
//!     Err(ClientError::Store(e)) => println!("API error {}: {}", e.status, e.error),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

use crate::entities::ParseError;
use crate::error::ConfigError;

/// Default details when the error body carries none.
pub const NO_DETAILS: &str = "No details provided";

/// Details reported for connection-level failures.
pub const CONNECTION_FAILED_DETAILS: &str = "Failed to establish a connection to server.";

/// Classification of a failed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    /// The store is closed (HTTP 402).
    ClosedStore,
    /// The resource does not exist (HTTP 404).
    NotFound,
    /// The API rejected the payload (HTTP 422).
    ValidationError,
    /// The server could not be reached.
    ServerError,
    /// Any other 4xx/5xx response.
    Generic,
}

impl StoreErrorKind {
    /// Maps an HTTP status code to an error kind.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            402 => Self::ClosedStore,
            404 => Self::NotFound,
            422 => Self::ValidationError,
            _ => Self::Generic,
        }
    }
}

/// A failed request to the YouCan API.
///
/// # Example
///
/// ```rust
/// use youcan_store::{StoreError, StoreErrorKind};
/// use serde_json::json;
///
/// let body = json!({"detail": "order 12 does not exist"});
/// let error = StoreError::from_response(404, body.as_object().unwrap());
///
/// assert_eq!(error.kind, StoreErrorKind::NotFound);
/// assert_eq!(error.error, "Not Found");
/// assert_eq!(error.details, "order 12 does not exist");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Status {status} | Details: {details} | Error: {error}")]
pub struct StoreError {
    /// The failure classification.
    pub kind: StoreErrorKind,
    /// The HTTP status code (500 for connection failures).
    pub status: u16,
    /// Human-readable error label.
    pub error: String,
    /// Details extracted from the error body.
    pub details: String,
}

impl StoreError {
    /// Builds the error for a response with `status >= 400`.
    ///
    /// `body` is the decoded JSON error body, or an empty map when the
    /// response was not JSON.
    #[must_use]
    pub fn from_response(status: u16, body: &Map<String, Value>) -> Self {
        let kind = StoreErrorKind::from_status(status);
        let (error, details) = match kind {
            StoreErrorKind::ClosedStore => ("Store Closed".to_string(), body_text(body, "error")),
            StoreErrorKind::NotFound => ("Not Found".to_string(), body_text(body, "detail")),
            StoreErrorKind::ValidationError => {
                ("Validation Error".to_string(), body_text(body, "detail"))
            }
            StoreErrorKind::ServerError | StoreErrorKind::Generic => (
                body_text(body, "error").unwrap_or_else(|| "Unknown error".to_string()),
                body_text(body, "detail"),
            ),
        };

        Self {
            kind,
            status,
            error,
            details: details.unwrap_or_else(|| NO_DETAILS.to_string()),
        }
    }

    /// Builds the error reported when the server cannot be reached.
    #[must_use]
    pub fn connection_failed() -> Self {
        Self {
            kind: StoreErrorKind::ServerError,
            status: 500,
            error: "Request Failed".to_string(),
            details: CONNECTION_FAILED_DETAILS.to_string(),
        }
    }

    /// Returns `true` for HTTP 402 responses.
    #[must_use]
    pub fn is_closed_store(&self) -> bool {
        self.kind == StoreErrorKind::ClosedStore
    }

    /// Returns `true` for HTTP 404 responses.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StoreErrorKind::NotFound
    }

    /// Returns `true` for HTTP 422 responses.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.kind == StoreErrorKind::ValidationError
    }

    /// Returns `true` when the server could not be reached.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.kind == StoreErrorKind::ServerError
    }
}

/// Reads a field of the error body as display text; `null` counts as absent.
fn body_text(body: &Map<String, Value>, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Unified error type for SDK operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with an error status, or could not be reached.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The route or configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The response payload did not match the expected shape.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the underlying [`StoreError`], if this is a request failure.
    #[must_use]
    pub const fn as_store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Store(error) => Some(error),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreError>();
    assert_send_sync::<ClientError>();
};
