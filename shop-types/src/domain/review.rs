//! Customer reviews of items.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lowest accepted star rating.
pub const MIN_RATING: i64 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: i64 = 5;

/// A row of the `rating` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Review {
    pub rating_pk: i64,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = 5)]
    pub rating: i64,
    pub description: String,
    #[schema(value_type = String, example = "2024-05-01T12:00:00")]
    pub date: NaiveDateTime,
    pub name: String,
    pub item_fk: i64,
}

/// Columns written when a review is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub name: String,
    pub email: String,
    pub rating: i64,
    pub description: String,
    pub item_fk: i64,
    pub date: NaiveDateTime,
}
