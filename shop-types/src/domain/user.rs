//! Customer records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer row of the `user` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    #[schema(example = 7)]
    pub user_pk: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub address: Option<String>,
    /// Set once the customer has completed a purchase.
    pub sale: bool,
}

/// Columns written when a customer signs up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub address: Option<String>,
}
