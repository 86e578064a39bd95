//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Every request field is optional at the serde level so that a missing field
//! becomes a 400 with a field-specific message instead of a generic
//! deserialization failure. Use [`required`] to pull a field out.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

// ─────────────────────────────────────────────────────────────────────────────
// Field presence
// ─────────────────────────────────────────────────────────────────────────────

/// Values that count as "not provided" even when present in the body.
pub trait Present {
    fn is_present(&self) -> bool;
}

impl Present for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Present for i64 {
    fn is_present(&self) -> bool {
        *self != 0
    }
}

impl Present for f64 {
    fn is_present(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

/// Returns the field value, or `AppError::BadRequest(message)` when it is
/// absent, empty or zero.
pub fn required<T: Present>(value: Option<T>, message: &str) -> Result<T, AppError> {
    value
        .filter(|v| v.is_present())
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Lenient field decoding
// ─────────────────────────────────────────────────────────────────────────────

/// Deserializers accepting both JSON numbers and numeric strings, since
/// browser forms tend to send ids as strings.
pub mod lenient {
    use serde::{Deserialize, Deserializer, de::Error};
    use serde_json::Value;

    pub fn int<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
        match Option::<Value>::deserialize(de)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected an integer, got {n}"))),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected an integer, got \"{s}\""))),
            Some(other) => Err(D::Error::custom(format!("expected an integer, got {other}"))),
        }
    }

    pub fn float<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
        match Option::<Value>::deserialize(de)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected a number, got {n}"))),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected a number, got \"{s}\""))),
            Some(other) => Err(D::Error::custom(format!("expected a number, got {other}"))),
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        match Option::<Value>::deserialize(de)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            // A numeric zero counts as missing, like an empty string.
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(D::Error::custom(format!("expected a string, got {other}"))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lookup DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of every endpoint keyed by a single id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct IdRequest {
    #[serde(default, deserialize_with = "lenient::int")]
    #[schema(example = 1)]
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GetUserRequest {
    #[serde(rename = "userId", default, deserialize_with = "lenient::int")]
    #[schema(example = 7)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DiscountCodeRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    #[schema(example = "SUMMER10")]
    pub code: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// User DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Sign-up form. No field is mandatory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddUserRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub surname: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub postcode: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddUserResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[serde(rename = "insertedId")]
    #[schema(example = 7)]
    pub inserted_id: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Review DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddReviewRequest {
    #[serde(default, deserialize_with = "lenient::text")]
    #[schema(example = "Jane")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    #[schema(example = 5)]
    pub rating: Option<i64>,
    /// Review text.
    #[serde(default, deserialize_with = "lenient::text")]
    #[schema(example = "Fits perfectly.")]
    pub des: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    #[schema(example = 1)]
    pub item_fk: Option<i64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Cart DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddCartItemRequest {
    /// Cart id.
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub item_fk: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub quantity: Option<i64>,
    /// Variant id.
    #[serde(default, deserialize_with = "lenient::int")]
    pub variant: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AssignCartUserRequest {
    /// Cart id.
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub user_fk: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCartVariantRequest {
    /// Cart line id.
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub variant: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCartAmountRequest {
    /// Cart line id.
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub amount: Option<i64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Checkout DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `/api/create-checkout-session` and query of `/buy`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    /// Order total in currency units.
    #[serde(default, deserialize_with = "lenient::float")]
    #[schema(example = 49.9)]
    pub price: Option<f64>,
    #[serde(rename = "orderId", default, deserialize_with = "lenient::text")]
    #[schema(example = "1042")]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutResponse {
    #[schema(example = "https://checkout.stripe.com/c/pay/cs_test_a1b2c3")]
    pub url: String,
    #[schema(example = "cs_test_a1b2c3")]
    pub session_id: String,
}
