//! Discount codes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A discount code and whether it can currently be redeemed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Discount {
    pub discount_pk: i64,
    #[schema(example = "SUMMER10")]
    pub code: String,
    /// Percentage taken off the order total.
    #[schema(example = 10.0)]
    pub percent: f64,
    pub is_active: bool,
}
