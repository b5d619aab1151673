//! Typed records for YouCan API payloads.
//!
//! Every entity exposes a `from_json` constructor that validates the
//! payload: required fields must be present with the right JSON type, while
//! optional fields fall back to an explicit default (an empty list, `None`,
//! or an empty string). Parsing never mutates its input and performs no I/O.
//!
//! # Overview
//!
//! - [`Shop`] and [`Store`]: the login result
//! - [`StoreList`]: the store listing
//! - [`StoreSwitch`]: placeholder for the store switch payload
//! - [`Product`], [`Image`], [`ImageVariation`], [`VariantOption`], [`Meta`]
//!   and [`ProductList`]: the product catalog
//!
//! # Example
//!
//! ```rust
//! use youcan_store::entities::Shop;
//! use serde_json::json;
//!
//! let shop = Shop::from_json(&json!({
//!     "token": "abc",
//!     "token_type": "Bearer",
//!     "is_staff": false,
//!     "expired_at": "2024-01-01T00:00:00Z",
//! }))
//! .unwrap();
//!
//! assert!(shop.stores.is_empty());
//! assert_eq!(shop.token_expires_timestamp().unwrap(), 1_704_067_200);
//! ```

mod fields;
mod product;
mod shop;

pub use product::{Image, ImageVariation, Meta, Product, ProductList, VariantOption};
pub use shop::{Shop, Store, StoreList, StoreSwitch};

use thiserror::Error;

/// Errors raised while materializing an entity from JSON.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A required field is absent.
    #[error("{entity} payload is missing required field '{field}'")]
    MissingField {
        /// The entity being parsed.
        entity: &'static str,
        /// The absent field.
        field: &'static str,
    },

    /// A field is present but holds the wrong JSON type.
    #[error("{entity} field '{field}' has an unexpected type (expected {expected})")]
    InvalidField {
        /// The entity being parsed.
        entity: &'static str,
        /// The offending field.
        field: &'static str,
        /// The JSON type that was expected.
        expected: &'static str,
    },

    /// The payload itself has the wrong JSON shape.
    #[error("{entity} payload must be a JSON {expected}")]
    UnexpectedShape {
        /// The entity being parsed.
        entity: &'static str,
        /// The expected JSON shape (`object` or `array`).
        expected: &'static str,
    },

    /// A timestamp field is not valid ISO-8601.
    #[error("Invalid timestamp '{value}' in {entity} field '{field}'")]
    InvalidTimestamp {
        /// The entity being parsed.
        entity: &'static str,
        /// The offending field.
        field: &'static str,
        /// The raw value.
        value: String,
    },

    /// The server answered with text where JSON was required.
    #[error("Expected a JSON response for {entity}, received text")]
    UnexpectedBody {
        /// The entity that was expected.
        entity: &'static str,
    },

    /// The entity has no parser yet.
    #[error("Parsing {entity} payloads is not supported yet")]
    UnsupportedEntity {
        /// The entity that was requested.
        entity: &'static str,
    },
}
