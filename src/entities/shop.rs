//! Authentication and store records.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::entities::fields::{parse_timestamp, Fields};
use crate::entities::ParseError;

/// A store owned by the authenticated account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Store {
    /// Store identifier.
    #[serde(rename = "store_id")]
    pub id: String,
    /// URL slug of the store.
    pub slug: String,
    /// Whether the store is active.
    pub is_active: bool,
    /// Whether the store owner's email is verified.
    pub is_email_verified: bool,
}

impl Store {
    /// Parses a store entry of the login response.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `store_id`, `slug`, `is_active` or
    /// `is_email_verified` is missing or mistyped.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let fields = Fields::new("Store", value)?;
        Ok(Self {
            id: fields.string("store_id")?,
            slug: fields.string("slug")?,
            is_active: fields.boolean("is_active")?,
            is_email_verified: fields.boolean("is_email_verified")?,
        })
    }

    /// Parses an entry of the store listing, where every field is optional.
    ///
    /// The listing names the identifier `id`; `store_id` is accepted too so
    /// a serialized [`StoreList`] parses back.
    fn from_listing_json(value: &Value) -> Result<Self, ParseError> {
        let fields = Fields::new("Store", value)?;
        let id = if fields.optional_nested("id").is_some() {
            fields.string("id")?
        } else {
            fields.string_or("store_id", "")?
        };
        Ok(Self {
            id,
            slug: fields.string_or("slug", "")?,
            is_active: fields.boolean_or("is_active", false)?,
            is_email_verified: fields.boolean_or("is_email_verified", false)?,
        })
    }
}

/// The result of a successful login.
///
/// # Example
///
/// ```rust
/// use youcan_store::entities::Shop;
/// use serde_json::json;
///
/// let shop = Shop::from_json(&json!({
///     "token": "abc",
///     "token_type": "Bearer",
///     "is_staff": false,
///     "expired_at": "2024-01-01T00:00:00Z",
///     "stores": [
///         {"store_id": "s1", "slug": "one", "is_active": true, "is_email_verified": false},
///         {"store_id": "s2", "slug": "two", "is_active": false, "is_email_verified": true}
///     ]
/// }))
/// .unwrap();
///
/// assert_eq!(shop.total_stores(), 2);
/// assert_eq!(shop.total_active_stores(), 1);
/// assert_eq!(shop.total_verified_stores(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Shop {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Token type reported by the API (usually `Bearer`).
    pub token_type: String,
    /// Whether the account is a staff account.
    pub is_staff: bool,
    /// Token expiry as an ISO-8601 string.
    #[serde(rename = "expired_at")]
    pub expires_at: String,
    /// Stores available to the account; empty when the payload has none.
    pub stores: Vec<Store>,
}

impl Shop {
    /// Parses the login response.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `token`, `token_type`, `is_staff` or
    /// `expired_at` is missing or mistyped, or if any store entry is
    /// invalid. An absent `stores` field yields an empty list.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let fields = Fields::new("Shop", value)?;
        Ok(Self {
            token: fields.string("token")?,
            token_type: fields.string("token_type")?,
            is_staff: fields.boolean("is_staff")?,
            expires_at: fields.string("expired_at")?,
            stores: fields.list("stores", Store::from_json)?,
        })
    }

    /// Returns the token expiry as a UTC date-time.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTimestamp`] if `expires_at` is not
    /// ISO-8601.
    pub fn token_expires_at(&self) -> Result<DateTime<Utc>, ParseError> {
        parse_timestamp("Shop", "expired_at", &self.expires_at)
    }

    /// Returns the token expiry as Unix epoch seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTimestamp`] if `expires_at` is not
    /// ISO-8601.
    pub fn token_expires_timestamp(&self) -> Result<i64, ParseError> {
        self.token_expires_at().map(|expiry| expiry.timestamp())
    }

    /// Returns `true` if the token has expired.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTimestamp`] if `expires_at` is not
    /// ISO-8601.
    pub fn is_token_expired(&self) -> Result<bool, ParseError> {
        self.token_expires_at().map(|expiry| Utc::now() > expiry)
    }

    /// Number of stores on the account.
    #[must_use]
    pub fn total_stores(&self) -> usize {
        self.stores.len()
    }

    /// Number of active stores.
    #[must_use]
    pub fn total_active_stores(&self) -> usize {
        self.stores.iter().filter(|store| store.is_active).count()
    }

    /// Number of stores with a verified email.
    #[must_use]
    pub fn total_verified_stores(&self) -> usize {
        self.stores
            .iter()
            .filter(|store| store.is_email_verified)
            .count()
    }
}

/// The payload of `GET /stores`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StoreList {
    /// Every store, active or not.
    pub stores: Vec<Store>,
}

impl StoreList {
    /// Parses the store listing.
    ///
    /// Listing entries are lenient: `id` and `slug` default to an empty
    /// string and both flags default to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the payload or an entry is not an object,
    /// or a present field has the wrong type.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let fields = Fields::new("StoreList", value)?;
        Ok(Self {
            stores: fields.list("stores", Store::from_listing_json)?,
        })
    }

    /// Iterates over the active stores.
    pub fn active(&self) -> impl Iterator<Item = &Store> {
        self.stores.iter().filter(|store| store.is_active)
    }
}

/// Token issued when switching the active store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StoreSwitch {
    /// Identifier of the store switched to.
    pub id: String,
    /// Bearer token scoped to that store.
    pub token: String,
    /// Token type reported by the API.
    pub token_type: String,
    /// Token expiry as an ISO-8601 string.
    pub expires_at: String,
}

impl StoreSwitch {
    /// Parses a store switch payload.
    ///
    /// # Errors
    ///
    /// Always returns [`ParseError::UnsupportedEntity`].
    // TODO: map the store switch response once its payload layout is documented.
    pub fn from_json(_value: &Value) -> Result<Self, ParseError> {
        Err(ParseError::UnsupportedEntity {
            entity: "StoreSwitch",
        })
    }

    /// Returns the token expiry as Unix epoch seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTimestamp`] if `expires_at` is not
    /// ISO-8601.
    pub fn token_expires_timestamp(&self) -> Result<i64, ParseError> {
        parse_timestamp("StoreSwitch", "expires_at", &self.expires_at)
            .map(|expiry| expiry.timestamp())
    }
}
