//! Catalog rows: items, their variants and images, and collections.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    #[schema(example = 1)]
    pub item_pk: i64,
    #[schema(example = "Linen shirt")]
    pub name: String,
    pub description: Option<String>,
    /// Price in currency units, e.g. `19.99`.
    #[schema(example = 19.99)]
    pub price: f64,
    pub image_url: Option<String>,
}

/// A purchasable variant (size, colour, ...) of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Variant {
    pub variant_pk: i64,
    pub item_fk: i64,
    #[schema(example = "M / Sand")]
    pub name: String,
    /// Overrides the item price when set.
    pub price: Option<f64>,
    pub stock: i64,
}

/// An image attached to one or more variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Image {
    pub image_pk: i64,
    pub url: String,
    pub alt: Option<String>,
}

/// A named group of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Collection {
    pub collection_pk: i64,
    #[schema(example = "Summer")]
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
