//! Payment processor boundary.
//!
//! The processor is an external collaborator: the lifecycle engine only
//! creates intents, reads back a succeeded/not-succeeded signal, and asks for
//! refunds on cancellation. [`StubProcessor`] is the in-memory double used by
//! the demo binary and the tests; real deployments implement the trait
//! against their gateway.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A freshly created payment intent.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Processor-side view of an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentStatus {
    Pending,
    Succeeded,
    Failed,
}

/// Result of a refund request.
#[derive(Debug, Clone)]
pub struct Refund {
    pub id: String,
    pub amount: u32,
    pub status: RefundStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundStatus {
    Completed,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("unknown payment intent: {0}")]
    UnknownIntent(String),
    #[error("intent {0} has not succeeded, cannot refund")]
    NotRefundable(String),
    #[error("payment provider error: {0}")]
    Provider(String),
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_intent(
        &self,
        amount: u32,
        currency: &str,
        order_number: &str,
    ) -> Result<PaymentIntent, PaymentError>;

    async fn retrieve_intent(&self, intent_id: &str) -> Result<IntentStatus, PaymentError>;

    /// Refunds `amount` (or the full amount if `None`) of a succeeded intent.
    async fn refund(&self, reference: &str, amount: Option<u32>)
        -> Result<Refund, PaymentError>;
}

#[derive(Debug)]
struct StubIntent {
    amount: u32,
    status: IntentStatus,
}

/// In-memory processor double. Intents start `Pending`; tests and the demo
/// flip them with [`StubProcessor::settle`] to simulate the gateway webhook.
#[derive(Debug, Default)]
pub struct StubProcessor {
    intents: Mutex<HashMap<String, StubIntent>>,
    counter: AtomicU64,
}

impl StubProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an intent as succeeded, as a gateway webhook would.
    pub fn settle(&self, intent_id: &str) {
        let mut intents = self.intents.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(intent) = intents.get_mut(intent_id) {
            intent.status = IntentStatus::Succeeded;
        }
    }

    /// Marks an intent as failed.
    pub fn reject(&self, intent_id: &str) {
        let mut intents = self.intents.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(intent) = intents.get_mut(intent_id) {
            intent.status = IntentStatus::Failed;
        }
    }
}

#[async_trait]
impl PaymentProcessor for StubProcessor {
    async fn create_intent(
        &self,
        amount: u32,
        _currency: &str,
        order_number: &str,
    ) -> Result<PaymentIntent, PaymentError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let id = format!("pi_{n}");
        let mut intents = self.intents.lock().unwrap_or_else(|e| e.into_inner());
        intents.insert(
            id.clone(),
            StubIntent {
                amount,
                status: IntentStatus::Pending,
            },
        );
        Ok(PaymentIntent {
            client_secret: format!("{id}_secret_{order_number}"),
            id,
        })
    }

    async fn retrieve_intent(&self, intent_id: &str) -> Result<IntentStatus, PaymentError> {
        let intents = self.intents.lock().unwrap_or_else(|e| e.into_inner());
        intents
            .get(intent_id)
            .map(|i| i.status)
            .ok_or_else(|| PaymentError::UnknownIntent(intent_id.to_string()))
    }

    async fn refund(
        &self,
        reference: &str,
        amount: Option<u32>,
    ) -> Result<Refund, PaymentError> {
        let intents = self.intents.lock().unwrap_or_else(|e| e.into_inner());
        let intent = intents
            .get(reference)
            .ok_or_else(|| PaymentError::UnknownIntent(reference.to_string()))?;
        if intent.status != IntentStatus::Succeeded {
            return Err(PaymentError::NotRefundable(reference.to_string()));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Refund {
            id: format!("re_{n}"),
            amount: amount.unwrap_or(intent.amount),
            status: RefundStatus::Completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn intent_lifecycle() {
        let processor = StubProcessor::new();
        let intent = processor.create_intent(308, "thb", "ORD-1").await.unwrap();
        assert_eq!(
            processor.retrieve_intent(&intent.id).await.unwrap(),
            IntentStatus::Pending
        );

        processor.settle(&intent.id);
        assert_eq!(
            processor.retrieve_intent(&intent.id).await.unwrap(),
            IntentStatus::Succeeded
        );

        let refund = processor.refund(&intent.id, None).await.unwrap();
        assert_eq!(refund.amount, 308);
        assert_eq!(refund.status, RefundStatus::Completed);
    }

    #[tokio::test]
    async fn pending_intents_cannot_be_refunded() {
        let processor = StubProcessor::new();
        let intent = processor.create_intent(100, "thb", "ORD-2").await.unwrap();
        let err = processor.refund(&intent.id, None).await.unwrap_err();
        assert!(matches!(err, PaymentError::NotRefundable(_)));
    }

    #[tokio::test]
    async fn unknown_intents_are_reported() {
        let processor = StubProcessor::new();
        let err = processor.retrieve_intent("pi_missing").await.unwrap_err();
        assert!(matches!(err, PaymentError::UnknownIntent(_)));
    }
}
