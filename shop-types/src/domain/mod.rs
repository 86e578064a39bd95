//! Domain models for the storefront.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod content;
pub mod discount;
pub mod review;
pub mod user;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use cart::{Cart, CartLine, CartLineDetail, NewCartLine};
pub use catalog::{Collection, Image, Item, Variant};
pub use checkout::{CheckoutOrder, CheckoutSession};
pub use content::{Article, Topic};
pub use discount::Discount;
pub use review::{NewReview, Review};
pub use user::{NewUser, User};

/// Outcome of an INSERT, UPDATE or DELETE statement.
///
/// `insert_id` is only set for inserts into a table with a generated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    #[schema(example = 1)]
    pub affected_rows: u64,
    #[schema(example = 42)]
    pub insert_id: Option<i64>,
}

impl WriteResult {
    /// Result of an insert that generated `insert_id`.
    pub fn inserted(affected_rows: u64, insert_id: i64) -> Self {
        Self {
            affected_rows,
            insert_id: Some(insert_id),
        }
    }

    /// Result of an update or delete.
    pub fn changed(affected_rows: u64) -> Self {
        Self {
            affected_rows,
            insert_id: None,
        }
    }
}
