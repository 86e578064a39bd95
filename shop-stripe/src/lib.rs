//! # Shop Stripe
//!
//! Outbound adapter for Stripe Checkout. [`StripeGateway`] implements the
//! `PaymentGateway` port by posting a form-encoded request to
//! `/v1/checkout/sessions` and returning the hosted payment page URL.

mod error;

use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use shop_types::{CheckoutOrder, CheckoutSession, PaymentError, PaymentGateway};

pub use error::StripeError;

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for checkout session creation.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: String,
    /// API root, overridable so tests can point at a local server.
    pub api_base: String,
    pub currency: String,
    pub success_url: String,
    pub cancel_url: String,
}

impl StripeConfig {
    /// Config with Stripe's public API root and USD line items.
    pub fn new(
        secret_key: impl Into<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            currency: "usd".to_string(),
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into().to_lowercase();
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gateway
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize, Debug)]
struct CheckoutSessionApiResponse {
    id: String,
    url: Option<String>,
}

/// Stripe Checkout client.
pub struct StripeGateway {
    http: Client,
    config: StripeConfig,
}

impl StripeGateway {
    /// Creates a gateway. Fails when the secret key is empty.
    pub fn new(config: StripeConfig) -> Result<Self, StripeError> {
        if config.secret_key.trim().is_empty() {
            return Err(StripeError::Config("secret key is empty".to_string()));
        }

        Ok(Self {
            http: Client::new(),
            config,
        })
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Form fields for a single-line-item card payment of `order`.
    pub fn checkout_form(&self, order: &CheckoutOrder) -> Vec<(String, String)> {
        let config = &self.config;
        vec![
            ("payment_method_types[]".to_string(), "card".to_string()),
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), config.success_url.clone()),
            ("cancel_url".to_string(), config.cancel_url.clone()),
            (
                "line_items[0][price_data][currency]".to_string(),
                config.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                order.product_name(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                order.amount_minor.to_string(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("metadata[orderId]".to_string(), order.order_id.clone()),
        ]
    }

    async fn post_checkout_session(
        &self,
        order: &CheckoutOrder,
    ) -> Result<CheckoutSession, StripeError> {
        let api_url = format!("{}/v1/checkout/sessions", self.config.api_base);
        info!(order_id = %order.order_id, amount = order.amount_minor, "Creating Stripe checkout session");

        let response = self
            .http
            .post(&api_url)
            .basic_auth(&self.config.secret_key, None::<&str>)
            .form(&self.checkout_form(order))
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            let message = error::error_message(&body_text);
            error!(status = status.as_u16(), %message, "Stripe checkout session request failed");
            return Err(StripeError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        let session: CheckoutSessionApiResponse = serde_json::from_str(&body_text)?;
        let url = session.url.ok_or(StripeError::MissingUrl)?;

        info!(session_id = %session.id, "Stripe checkout session created");
        Ok(CheckoutSession {
            id: session.id,
            url,
        })
    }
}

#[async_trait::async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_checkout_session(
        &self,
        order: &CheckoutOrder,
    ) -> Result<CheckoutSession, PaymentError> {
        Ok(self.post_checkout_session(order).await?)
    }
}
