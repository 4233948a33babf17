//! Payment gateway trait and the simulated implementation.

use async_trait::async_trait;
use common::{IdSource, Latency, RandomIds};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Characters in a transaction id after the `TXN-` prefix.
const TRANSACTION_SUFFIX_LEN: usize = 8;

/// Delay applied by the simulated gateway before approving a charge.
const PROCESSING_DELAY_MS: u64 = 100;

/// Outcome of a payment attempt.
///
/// A transaction id is present exactly when the payment succeeded; the
/// constructors make any other shape unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    success: bool,
    transaction_id: Option<String>,
    message: String,
}

impl PaymentResult {
    /// Creates a successful result carrying its transaction id.
    pub fn approved(transaction_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            transaction_id: Some(transaction_id.into()),
            message: message.into(),
        }
    }

    /// Creates a failed result. Failed payments never carry a
    /// transaction id.
    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id: None,
            message: message.into(),
        }
    }

    /// Returns true if the payment went through.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the transaction id assigned by the gateway.
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    /// Returns the outcome message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Trait for charging payments.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Attempts to charge the given amount.
    ///
    /// Total by contract: a rejected charge comes back as a declined
    /// [`PaymentResult`], never as an error.
    async fn process(&self, method: &str, amount: Money) -> PaymentResult;
}

/// Simulated payment gateway.
///
/// Declines non-positive amounts immediately with "Invalid amount";
/// approves everything else after its configured delay and assigns a
/// fresh `TXN-` transaction id. The payment method is logged but never
/// validated.
#[derive(Debug, Clone)]
pub struct SimulatedGateway<I: IdSource> {
    latency: Latency,
    ids: I,
}

impl SimulatedGateway<RandomIds> {
    /// Creates a gateway with random transaction ids and the default
    /// processing delay.
    pub fn new() -> Self {
        Self::with_parts(Latency::from_millis(PROCESSING_DELAY_MS), RandomIds::new())
    }
}

impl Default for SimulatedGateway<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> SimulatedGateway<I> {
    /// Creates a gateway with the given delay and id source.
    pub fn with_parts(latency: Latency, ids: I) -> Self {
        Self { latency, ids }
    }
}

#[async_trait]
impl<I: IdSource> PaymentGateway for SimulatedGateway<I> {
    async fn process(&self, method: &str, amount: Money) -> PaymentResult {
        if !amount.is_positive() {
            tracing::warn!(method, %amount, "payment rejected");
            return PaymentResult::declined("Invalid amount");
        }

        tracing::info!(method, %amount, "processing payment");
        self.latency.wait().await;

        let transaction_id = format!("TXN-{}", self.ids.suffix(TRANSACTION_SUFFIX_LEN));
        tracing::info!(%transaction_id, "payment processed");
        PaymentResult::approved(transaction_id, "Payment successful")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SequentialIds;

    fn test_gateway() -> SimulatedGateway<SequentialIds> {
        SimulatedGateway::with_parts(Latency::none(), SequentialIds::new())
    }

    #[tokio::test]
    async fn test_positive_amount_is_approved() {
        let gateway = test_gateway();
        let result = gateway.process("CREDIT_CARD", Money::from_cents(97196)).await;

        assert!(result.is_success());
        assert_eq!(result.transaction_id(), Some("TXN-00000001"));
        assert_eq!(result.message(), "Payment successful");
    }

    #[tokio::test]
    async fn test_zero_amount_is_declined() {
        let gateway = test_gateway();
        let result = gateway.process("CREDIT_CARD", Money::zero()).await;

        assert!(!result.is_success());
        assert_eq!(result.transaction_id(), None);
        assert_eq!(result.message(), "Invalid amount");
    }

    #[tokio::test]
    async fn test_negative_amount_is_declined() {
        let gateway = test_gateway();
        let result = gateway.process("CREDIT_CARD", Money::from_cents(-500)).await;

        assert!(!result.is_success());
        assert_eq!(result.transaction_id(), None);
    }

    #[tokio::test]
    async fn test_transaction_ids_advance_per_charge() {
        let gateway = test_gateway();

        let first = gateway.process("CREDIT_CARD", Money::from_cents(100)).await;
        let second = gateway.process("PAYPAL", Money::from_cents(100)).await;

        assert_eq!(first.transaction_id(), Some("TXN-00000001"));
        assert_eq!(second.transaction_id(), Some("TXN-00000002"));
    }

    #[tokio::test]
    async fn test_method_text_is_never_validated() {
        let gateway = test_gateway();
        let result = gateway.process("CARRIER_PIGEON", Money::from_cents(100)).await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_random_ids_produce_txn_prefix() {
        let gateway = SimulatedGateway::with_parts(Latency::none(), RandomIds::new());
        let result = gateway.process("CREDIT_CARD", Money::from_cents(100)).await;

        let id = result.transaction_id().unwrap();
        assert!(id.starts_with("TXN-"));
        assert_eq!(id.len(), "TXN-".len() + 8);
    }

    #[test]
    fn test_result_serialization_roundtrip() {
        let result = PaymentResult::approved("TXN-0BADF00D", "Payment successful");
        let json = serde_json::to_string(&result).unwrap();
        let deserialized: PaymentResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deserialized);
    }
}
