//! Shopping carts and their lines.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A shopping cart, optionally owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Cart {
    pub cart_pk: i64,
    pub user_fk: Option<i64>,
    #[schema(value_type = String, example = "2024-05-01T12:00:00")]
    pub created: NaiveDateTime,
}

/// One row of `items_to_cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CartLine {
    pub pk: i64,
    pub cart_fk: i64,
    pub item_fk: i64,
    pub variant_fk: Option<i64>,
    pub amount: i64,
}

/// A cart line joined with its item and variant columns.
///
/// Item and variant columns are optional because the join is a LEFT JOIN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CartLineDetail {
    pub pk: i64,
    pub cart_fk: i64,
    pub item_fk: i64,
    pub variant_fk: Option<i64>,
    pub amount: i64,
    pub item_name: Option<String>,
    pub item_description: Option<String>,
    pub item_price: Option<f64>,
    pub item_image_url: Option<String>,
    pub variant_name: Option<String>,
    pub variant_price: Option<f64>,
    pub variant_stock: Option<i64>,
}

/// Columns written when an item is put into a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartLine {
    pub cart_fk: i64,
    pub item_fk: i64,
    pub variant_fk: i64,
    pub amount: i64,
}
