//! Configuration error types for the YouCan store SDK.
//!
//! Configuration constructors and route building return
//! `Result<T, ConfigError>` so invalid input is rejected before any request
//! is sent.
//!
//! # Example
//!
//! ```rust
//! use youcan_store::{BearerToken, ConfigError};
//!
//! let result = BearerToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the SDK or resolving a route.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Bearer token cannot be empty.
    #[error("Bearer token cannot be empty. Please provide the token returned by login.")]
    EmptyToken,

    /// Bearer token contains characters that cannot be sent in a header.
    #[error("Bearer token contains control characters and cannot be sent in an HTTP header.")]
    InvalidToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://api.youcan.shop').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A path template references a parameter that was not supplied.
    #[error("Missing path parameter '{name}' for route template '{template}'.")]
    MissingPathParameter {
        /// The name of the parameter referenced by the template.
        name: String,
        /// The template being resolved.
        template: String,
    },

    /// A path template is malformed (unbalanced braces).
    #[error("Invalid route template '{template}': unbalanced '{{' or '}}'.")]
    InvalidPathTemplate {
        /// The malformed template.
        template: String,
    },
}
