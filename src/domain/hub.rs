//! Live subscriber set with best-effort fan-out.
//!
//! [`BroadcastHub`] owns every connected subscriber behind a
//! `RwLock<HashMap<..>>`. Connection tasks register and unregister
//! themselves; the poll loop schedules [`BroadcastHub::broadcast_all`]
//! onto the serving runtime, so all set access happens on the async side.

use std::collections::HashMap;
use std::fmt;

use tokio::sync::RwLock;
use tokio::sync::mpsc;

use super::TagEvent;

/// Identity of one registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(uuid::Uuid);

impl SubscriberId {
    /// Creates a new random `SubscriberId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Central registry of live subscriber connections.
///
/// Each subscriber is a serialized-frame channel; the session task at the
/// other end forwards frames onto its WebSocket. A failed send means the
/// session is gone, so the hub sweeps that subscriber out after the
/// delivery pass.
///
/// # Concurrency
///
/// Register/unregister run concurrently from any number of connection
/// tasks; broadcasts take the read lock only for the delivery sweep.
#[derive(Debug, Default)]
pub struct BroadcastHub {
    subscribers: RwLock<HashMap<SubscriberId, mpsc::UnboundedSender<String>>>,
}

impl BroadcastHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber, returning its identity and the receiving
    /// end of its frame channel.
    pub async fn register(&self) -> (SubscriberId, mpsc::UnboundedReceiver<String>) {
        let id = SubscriberId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut map = self.subscribers.write().await;
        map.insert(id, tx);
        tracing::info!(subscriber = %id, subscribers = map.len(), "client connected");
        (id, rx)
    }

    /// Removes a subscriber from the live set.
    ///
    /// Idempotent: removing an absent or never-registered subscriber is a
    /// no-op.
    pub async fn unregister(&self, id: SubscriberId) {
        let mut map = self.subscribers.write().await;
        if map.remove(&id).is_some() {
            tracing::info!(subscriber = %id, subscribers = map.len(), "client disconnected");
        }
    }

    /// Serializes `event` once and attempts delivery to every registered
    /// subscriber.
    ///
    /// A failed delivery is logged, never propagates, and never prevents
    /// delivery to the remaining subscribers; the failed subscriber is
    /// unregistered after the sweep. Returns the number of subscribers the
    /// event was delivered to.
    pub async fn broadcast_all(&self, event: &TagEvent) -> usize {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize broadcast event");
                return 0;
            }
        };

        let mut delivered = 0;
        let mut failed = Vec::new();
        {
            let map = self.subscribers.read().await;
            for (id, tx) in map.iter() {
                if tx.send(json.clone()).is_ok() {
                    delivered += 1;
                } else {
                    tracing::error!(subscriber = %id, "failed to deliver event");
                    failed.push(*id);
                }
            }
        }
        for id in failed {
            self.unregister(id).await;
        }
        delivered
    }

    /// Returns the number of currently registered subscribers.
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn answer(category: &str) -> TagEvent {
        TagEvent::Answer {
            category: Category::from(category),
        }
    }

    #[tokio::test]
    async fn broadcast_reaches_all_registered() {
        let hub = BroadcastHub::new();
        let (_a, mut rx_a) = hub.register().await;
        let (_b, mut rx_b) = hub.register().await;

        let delivered = hub.broadcast_all(&answer("fruit")).await;
        assert_eq!(delivered, 2);

        let expected = r#"{"type":"answer","category":"fruit"}"#;
        assert_eq!(rx_a.recv().await.as_deref(), Some(expected));
        assert_eq!(rx_b.recv().await.as_deref(), Some(expected));
    }

    #[tokio::test]
    async fn broadcast_with_no_subscribers_drops_event() {
        let hub = BroadcastHub::new();
        let delivered = hub.broadcast_all(&answer("fruit")).await;
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn failed_delivery_is_isolated_and_swept() {
        let hub = BroadcastHub::new();
        let (_a, rx_a) = hub.register().await;
        let (_b, mut rx_b) = hub.register().await;

        // Dropping the receiver closes a's channel.
        drop(rx_a);

        let delivered = hub.broadcast_all(&answer("fruit")).await;
        assert_eq!(delivered, 1);
        assert!(rx_b.recv().await.is_some());

        // The failed subscriber is gone from the live set.
        assert_eq!(hub.subscriber_count().await, 1);
    }

    #[tokio::test]
    async fn unregister_is_idempotent() {
        let hub = BroadcastHub::new();
        let (id, _rx) = hub.register().await;
        assert_eq!(hub.subscriber_count().await, 1);

        hub.unregister(id).await;
        assert_eq!(hub.subscriber_count().await, 0);

        hub.unregister(id).await;
        hub.unregister(SubscriberId::new()).await;
        assert_eq!(hub.subscriber_count().await, 0);
    }

    #[tokio::test]
    async fn unregistered_subscriber_misses_broadcast() {
        let hub = BroadcastHub::new();
        let (_a, mut rx_a) = hub.register().await;
        let (_b, mut rx_b) = hub.register().await;
        let (id_c, mut rx_c) = hub.register().await;

        hub.unregister(id_c).await;

        let delivered = hub.broadcast_all(&answer("fruit")).await;
        assert_eq!(delivered, 2);
        assert!(rx_a.recv().await.is_some());
        assert!(rx_b.recv().await.is_some());

        // c's channel is closed with nothing buffered.
        assert!(rx_c.recv().await.is_none());
    }
}
