//! # YouCan Store SDK
//!
//! An async Rust SDK for the YouCan e-commerce API: login, store and
//! product listings, order search and order fulfillment.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A [`StoreClient`] facade with one method per API operation
//! - An [`HttpClient`] transport that injects the bearer token, encodes
//!   bodies as compact ASCII JSON and classifies failures
//! - A typed error taxonomy ([`StoreError`], [`StoreErrorKind`]) keyed by
//!   HTTP status code
//! - Validating parsers for every payload in [`entities`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use youcan_store::{ClientError, StoreClient};
//!
//! let client = StoreClient::new();
//!
//! match client.login("owner@example.com", "password").await {
//!     Ok(shop) => {
//!         println!("{} of {} stores active", shop.total_active_stores(), shop.total_stores());
//!         let stores = client.get_stores().await?;
//!     }
//!     Err(ClientError::Store(e)) if e.is_closed_store() => println!("closed: {}", e.details),
//!     Err(e) => return Err(e),
//! }
//! client.close();
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use youcan_store::{BaseUrl, StoreClient, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("https://api.youcan.shop").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! let client = StoreClient::with_config(config);
//! assert!(!client.http().has_session());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and token live on the client instance
//! - **No hidden retries**: Every failure is returned to the caller, typed
//! - **Strict parsing**: Missing required fields fail; optional ones default explicitly
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod client;
pub mod clients;
pub mod config;
pub mod entities;
pub mod error;

pub use client::StoreClient;
pub use config::{BaseUrl, BearerToken, StoreConfig, StoreConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;

// Re-export HTTP layer types
pub use clients::{
    to_json, ClientError, HttpClient, HttpMethod, PathParam, ResponseBody, Route, StoreError,
    StoreErrorKind,
};

// Re-export entity types
pub use entities::{
    Image, ImageVariation, Meta, ParseError, Product, ProductList, Shop, Store, StoreList,
    StoreSwitch, VariantOption,
};
