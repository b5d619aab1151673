//! Product catalog records.
//!
//! A [`Product`] nests its SEO [`Meta`], its [`Image`]s (each with resized
//! [`ImageVariation`]s) and the [`VariantOption`]s that describe its
//! variants.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::entities::fields::Fields;
use crate::entities::ParseError;

/// Resized copies of a product image. Missing sizes are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ImageVariation {
    /// URL of the original upload.
    pub original: String,
    /// Small thumbnail URL.
    pub sm: String,
    /// Medium thumbnail URL.
    pub md: String,
    /// Large thumbnail URL.
    pub lg: String,
}

impl ImageVariation {
    /// Parses an image variation map.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the payload is not an object or a size is
    /// not a string.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let fields = Fields::new("ImageVariation", value)?;
        Ok(Self {
            original: fields.string_or("original", "")?,
            sm: fields.string_or("sm", "")?,
            md: fields.string_or("md", "")?,
            lg: fields.string_or("lg", "")?,
        })
    }
}

/// A product image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Image {
    /// Image identifier.
    pub id: String,
    /// File name.
    pub name: String,
    /// Numeric image type code.
    #[serde(rename = "type")]
    pub kind: i64,
    /// Public URL.
    pub url: String,
    /// Position in the product gallery.
    pub order: i64,
    /// Resized copies; empty when the payload has none.
    pub variations: ImageVariation,
}

impl Image {
    /// Parses an image.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `id`, `name`, `type`, `url` or `order` is
    /// missing or mistyped.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let fields = Fields::new("Image", value)?;
        let variations = fields
            .optional_nested("variations")
            .map(ImageVariation::from_json)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            id: fields.string("id")?,
            name: fields.string("name")?,
            kind: fields.integer("type")?,
            url: fields.string("url")?,
            order: fields.integer("order")?,
            variations,
        })
    }
}

/// An option a product varies on (size, color, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariantOption {
    /// Option name.
    pub name: String,
    /// Numeric option type code.
    #[serde(rename = "type")]
    pub kind: i64,
    /// Allowed values, in display order.
    pub values: Vec<String>,
}

impl VariantOption {
    /// Parses a variant option.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `name` or `type` is missing or mistyped.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let fields = Fields::new("VariantOption", value)?;
        Ok(Self {
            name: fields.string("name")?,
            kind: fields.integer("type")?,
            values: fields.string_list("values")?,
        })
    }
}

/// SEO metadata of a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Meta {
    /// Page title.
    pub title: String,
    /// Page description.
    pub description: String,
    /// Social preview image URLs.
    pub images: Vec<String>,
}

impl Meta {
    /// Parses product metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `title` or `description` is missing or
    /// mistyped.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let fields = Fields::new("Meta", value)?;
        Ok(Self {
            title: fields.string("title")?,
            description: fields.string("description")?,
            images: fields.string_list("images")?,
        })
    }
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Product {
    /// Product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Storefront URL.
    pub public_url: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// HTML description.
    pub description: String,
    /// Selling price.
    pub price: f64,
    /// Price shown struck through.
    pub compare_at_price: f64,
    /// Purchase cost, when recorded.
    pub cost_price: Option<f64>,
    /// Whether the product is visible on the storefront.
    pub visibility: bool,
    /// Whether the product has variants.
    pub has_variants: bool,
    /// Number of variants.
    pub variants_count: i64,
    /// Options the variants differ on.
    pub variant_options: Vec<VariantOption>,
    /// Units in stock.
    pub inventory: i64,
    /// Whether inventory is tracked.
    pub track_inventory: bool,
    /// Discount shown to customers.
    pub you_save_amount: f64,
    /// SEO metadata.
    pub meta: Meta,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Deletion time for soft-deleted products.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Gallery images, in order.
    pub images: Vec<Image>,
}

impl Product {
    /// Parses a product, including its nested metadata, images and variant
    /// options.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a required field is missing or mistyped,
    /// a timestamp is not ISO-8601, or a nested record is invalid.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let fields = Fields::new("Product", value)?;
        Ok(Self {
            id: fields.string("id")?,
            name: fields.string("name")?,
            slug: fields.string("slug")?,
            public_url: fields.string("public_url")?,
            thumbnail: fields.string("thumbnail")?,
            description: fields.string("description")?,
            price: fields.number("price")?,
            compare_at_price: fields.number("compare_at_price")?,
            cost_price: fields.optional_number("cost_price")?,
            visibility: fields.boolean("visibility")?,
            has_variants: fields.boolean("has_variants")?,
            variants_count: fields.integer("variants_count")?,
            variant_options: fields.list("variant_options", VariantOption::from_json)?,
            inventory: fields.integer("inventory")?,
            track_inventory: fields.boolean("track_inventory")?,
            you_save_amount: fields.number("you_save_amount")?,
            meta: Meta::from_json(fields.nested("meta")?)?,
            created_at: fields.timestamp("created_at")?,
            updated_at: fields.timestamp("updated_at")?,
            deleted_at: fields.optional_timestamp("deleted_at")?,
            images: fields.list("images", Image::from_json)?,
        })
    }

    /// Returns `true` if the product has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// The payload of `GET /products`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductList {
    /// Products in the order returned by the API.
    pub products: Vec<Product>,
}

impl ProductList {
    /// Parses a product listing.
    ///
    /// Accepts either a JSON array of products or an object whose `data`
    /// field holds that array.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedShape`] if the payload is neither,
    /// or the first product error encountered.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(map) => map
                .get("data")
                .and_then(Value::as_array)
                .ok_or(ParseError::UnexpectedShape {
                    entity: "ProductList",
                    expected: "array",
                })?,
            _ => {
                return Err(ParseError::UnexpectedShape {
                    entity: "ProductList",
                    expected: "array",
                })
            }
        };

        Ok(Self {
            products: items
                .iter()
                .map(Product::from_json)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Returns the number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the listing is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
