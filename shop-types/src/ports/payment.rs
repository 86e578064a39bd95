//! Payment processor port.

use crate::domain::{CheckoutOrder, CheckoutSession};
use crate::error::PaymentError;

/// Port trait for hosted-checkout payment processors.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Creates a hosted checkout session for `order` and returns its redirect URL.
    async fn create_checkout_session(
        &self,
        order: &CheckoutOrder,
    ) -> Result<CheckoutSession, PaymentError>;
}
