//! Checkout values handed to the payment processor.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An order to be paid through a hosted checkout session.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOrder {
    /// Client-side order reference, copied into the session metadata.
    pub order_id: String,
    /// Total in minor currency units (cents).
    pub amount_minor: i64,
}

impl CheckoutOrder {
    /// Builds an order from a price in currency units, rounding to the nearest cent.
    pub fn from_price(order_id: impl Into<String>, price: f64) -> Self {
        Self {
            order_id: order_id.into(),
            amount_minor: (price * 100.0).round() as i64,
        }
    }

    /// Name shown on the hosted payment page.
    pub fn product_name(&self) -> String {
        format!("Order {}", self.order_id)
    }
}

/// A hosted checkout session created by the payment processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckoutSession {
    #[schema(example = "cs_test_a1b2c3")]
    pub id: String,
    /// URL the customer is sent to in order to pay.
    #[schema(example = "https://checkout.stripe.com/c/pay/cs_test_a1b2c3")]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_price_rounds_to_cents() {
        assert_eq!(CheckoutOrder::from_price("1", 19.99).amount_minor, 1999);
        assert_eq!(CheckoutOrder::from_price("1", 0.125).amount_minor, 13);
        assert_eq!(CheckoutOrder::from_price("1", 12.0).amount_minor, 1200);
    }

    #[test]
    fn test_product_name() {
        let order = CheckoutOrder::from_price("A-17", 5.0);
        assert_eq!(order.product_name(), "Order A-17");
    }
}
