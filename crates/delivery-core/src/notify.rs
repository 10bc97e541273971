//! Notification fan-out.
//!
//! A direct publish-by-topic call, not a message broker: no persistence, no
//! retry, no acknowledgment. Topics are the `Display` forms of entity ids —
//! `user_<id>`, `restaurant_<id>`, `order_<id>`. Publishing to a topic with
//! no subscribers is a silent no-op, and a publish can never fail or block
//! the business operation that triggered it: every failure path is logged
//! and swallowed.

use crate::model::{OrderId, OrderStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Per-subscriber buffer. A subscriber that falls this far behind starts
/// losing events; delivery is best-effort by design.
const SUBSCRIBER_BUFFER: usize = 64;

/// A published event together with the topic it was addressed to.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub topic: String,
    #[serde(flatten)]
    pub event: NotificationEvent,
}

/// Event payloads emitted by the order lifecycle engine.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NotificationEvent {
    OrderPlaced {
        order_id: OrderId,
        order_number: String,
        total: u32,
    },
    StatusChanged {
        order_id: OrderId,
        status: OrderStatus,
        message: String,
        at: DateTime<Utc>,
    },
    OrderCancelled {
        order_id: OrderId,
        reason: String,
    },
    RiderAssigned {
        order_id: OrderId,
        rider_name: String,
        rider_phone: String,
    },
    PaymentRecorded {
        order_id: OrderId,
        reference: String,
    },
}

/// Topic-keyed fan-out hub.
///
/// Cheap to clone; all clones publish into the same subscriber table.
#[derive(Clone, Default)]
pub struct NotificationHub {
    topics: Arc<Mutex<HashMap<String, Vec<mpsc::Sender<Notification>>>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to a topic, returning the receiving end of a bounded
    /// channel. Dropping the receiver unsubscribes implicitly: the dead
    /// sender is pruned on the next publish.
    pub fn subscribe(&self, topic: impl Into<String>) -> mpsc::Receiver<Notification> {
        let topic = topic.into();
        let (sender, receiver) = mpsc::channel(SUBSCRIBER_BUFFER);
        let mut topics = self.topics.lock().unwrap_or_else(|e| e.into_inner());
        topics.entry(topic).or_default().push(sender);
        receiver
    }

    /// Fire-and-forget publish. Never blocks, never errors.
    pub fn publish(&self, topic: &str, event: NotificationEvent) {
        let mut topics = self.topics.lock().unwrap_or_else(|e| e.into_inner());
        let Some(subscribers) = topics.get_mut(topic) else {
            debug!(topic, "No subscribers");
            return;
        };

        let notification = Notification {
            topic: topic.to_string(),
            event,
        };
        subscribers.retain(|sender| match sender.try_send(notification.clone()) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(topic, "Subscriber buffer full, dropping notification");
                true
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        });
        if subscribers.is_empty() {
            topics.remove(topic);
        }
    }
}
