//! src/eventbus/mod.rs
//!
//! In-process event bus with guaranteed delivery to multiple subscribers
//! via bounded MPSC queues. The overlay transport and any diagnostics
//! subscribe here; chat handling itself does not depend on the bus.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch, Mutex};

/// Events the bot publishes system-wide.
#[derive(Debug, Clone)]
pub enum BotEvent {
    /// An inbound chat message, after echo filtering.
    ChatMessage {
        channel: String,
        user: String,
        text: String,
        timestamp: DateTime<Utc>,
    },

    /// One overlay feed entry: a fragment of markup the widget renders as-is.
    OverlayFeed {
        html: String,
        timestamp: DateTime<Utc>,
    },

    /// Administrative/diagnostic broadcast.
    SystemMessage(String),

    /// Periodic heartbeat.
    Tick,
}

/// Each subscriber gets its own `mpsc::Sender<BotEvent>`.
///
/// - If a subscriber's buffer fills, `publish` awaits until there is space
///   (backpressure).
/// - If a subscriber dropped its receiver, sends to it just fail and are
///   ignored.
#[derive(Clone)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<mpsc::Sender<BotEvent>>>>,
    shutdown_tx: watch::Sender<bool>,
    pub shutdown_rx: watch::Receiver<bool>,
}

const DEFAULT_BUFFER_SIZE: usize = 10000;

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            subscribers: Arc::new(Mutex::new(vec![])),
            shutdown_tx: tx,
            shutdown_rx: rx,
        }
    }

    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    pub fn is_shutdown(&self) -> bool {
        *self.shutdown_rx.borrow()
    }

    /// Returns a receiver on which events will be delivered.
    pub async fn subscribe(&self, buffer_size: Option<usize>) -> mpsc::Receiver<BotEvent> {
        let size = buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE);
        let (tx, rx) = mpsc::channel(size);
        let mut subs = self.subscribers.lock().await;
        subs.push(tx);
        rx
    }

    /// Publish an event to all subscribers.
    pub async fn publish(&self, event: BotEvent) {
        let senders = {
            let subs = self.subscribers.lock().await;
            subs.clone()
        };
        for s in senders {
            let _ = s.send(event.clone()).await;
        }
    }

    /// Convenience: publish a `ChatMessage` event.
    pub async fn publish_chat(&self, channel: &str, user: &str, text: &str) {
        self.publish(BotEvent::ChatMessage {
            channel: channel.to_string(),
            user: user.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
        })
        .await;
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
