//! Stripe adapter errors.

use shop_types::PaymentError;

/// Errors raised while talking to the Stripe API.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("Stripe API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Stripe API returned an error: {message} (Status: {status_code})")]
    Api { status_code: u16, message: String },

    #[error("Failed to parse Stripe API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stripe response missing checkout URL")]
    MissingUrl,

    #[error("Stripe configuration missing or incomplete: {0}")]
    Config(String),
}

impl From<StripeError> for PaymentError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::Request(e) => PaymentError::Unavailable(e.to_string()),
            StripeError::Api {
                status_code,
                message,
            } => PaymentError::Rejected {
                status: status_code,
                message,
            },
            StripeError::Parse(e) => PaymentError::InvalidResponse(e.to_string()),
            e @ StripeError::MissingUrl => PaymentError::InvalidResponse(e.to_string()),
            StripeError::Config(msg) => PaymentError::Config(msg),
        }
    }
}

/// Pulls `error.message` out of a Stripe error body, falling back to the raw body.
pub(crate) fn error_message(body_text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body_text) {
        Ok(json_body) => json_body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or(body_text)
            .to_string(),
        Err(_) => body_text.to_string(),
    }
}
