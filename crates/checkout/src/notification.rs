//! Order confirmation composition and delivery.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::Latency;
use serde::{Deserialize, Serialize};

use crate::items::LineItem;
use crate::money::Money;
use crate::payment::PaymentResult;

/// Delay applied by the logged sender per delivery.
const DELIVERY_DELAY_MS: u64 = 50;

/// A rendered order confirmation ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Destination address.
    pub recipient: String,

    /// Subject line.
    pub subject: String,

    /// Plain-text body.
    pub body: String,
}

impl OrderConfirmation {
    /// Renders the confirmation document.
    ///
    /// Optional sections render only when their data is present. A
    /// declined payment carries no transaction id, so its confirmation
    /// has no transaction line.
    pub fn compose(
        recipient: impl Into<String>,
        order_id: Option<&str>,
        items: &[LineItem],
        discount: Option<(&str, Money)>,
        subtotal: Money,
        total: Money,
        payment: Option<&PaymentResult>,
    ) -> Self {
        let subject = match order_id {
            Some(id) => format!("Order Confirmation - {id}"),
            None => "Order Confirmation".to_string(),
        };

        let mut body = String::from("Thank you for your order!\n\n");
        if let Some(id) = order_id {
            body.push_str(&format!("Order ID: {id}\n\n"));
        }

        body.push_str("Items:\n");
        for item in items {
            body.push_str(&format!(
                "- {} x{} - {}\n",
                item.product_name, item.quantity, item.unit_price
            ));
        }

        body.push_str(&format!("\nSubtotal: {subtotal}"));
        if let Some((code, amount)) = discount {
            body.push_str(&format!("\nDiscount ({code}): -{amount}"));
        }
        body.push_str(&format!("\nTotal: {total}"));

        if let Some(transaction_id) = payment.and_then(PaymentResult::transaction_id) {
            body.push_str(&format!("\n\nTransaction ID: {transaction_id}"));
        }

        Self {
            recipient: recipient.into(),
            subject,
            body,
        }
    }
}

/// Trait for delivering order confirmations.
#[async_trait]
pub trait ConfirmationSender: Send + Sync {
    /// Delivers a confirmation. Delivery is best effort and never fails.
    async fn deliver(&self, confirmation: &OrderConfirmation);
}

/// Sender that writes the confirmation to the log instead of a mailbox.
#[derive(Debug, Clone)]
pub struct LoggedEmailSender {
    latency: Latency,
}

impl LoggedEmailSender {
    /// Creates a sender with the default delivery delay.
    pub fn new() -> Self {
        Self {
            latency: Latency::from_millis(DELIVERY_DELAY_MS),
        }
    }

    /// Creates a sender with the given delay.
    pub fn with_latency(latency: Latency) -> Self {
        Self { latency }
    }
}

impl Default for LoggedEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfirmationSender for LoggedEmailSender {
    async fn deliver(&self, confirmation: &OrderConfirmation) {
        tracing::info!(
            recipient = %confirmation.recipient,
            subject = %confirmation.subject,
            "sending confirmation email"
        );
        tracing::debug!(body = %confirmation.body, "confirmation body");

        self.latency.wait().await;

        tracing::info!(recipient = %confirmation.recipient, "confirmation email sent");
    }
}

/// Sender that records every delivery, for assertions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySender {
    deliveries: Arc<RwLock<Vec<OrderConfirmation>>>,
}

impl InMemorySender {
    /// Creates a new recording sender.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of delivered confirmations.
    pub fn delivery_count(&self) -> usize {
        self.deliveries.read().unwrap().len()
    }

    /// Returns a copy of the most recent delivery.
    pub fn last_delivery(&self) -> Option<OrderConfirmation> {
        self.deliveries.read().unwrap().last().cloned()
    }
}

#[async_trait]
impl ConfirmationSender for InMemorySender {
    async fn deliver(&self, confirmation: &OrderConfirmation) {
        self.deliveries.write().unwrap().push(confirmation.clone());
    }
}
