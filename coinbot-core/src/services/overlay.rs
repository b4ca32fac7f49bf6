//! Handle for the overlay feed: notable events rendered as small markup
//! fragments and fanned out over the event bus. Failures never land here;
//! the feed stays a positive-event stream.

use std::sync::Arc;

use chrono::Utc;

use crate::eventbus::{BotEvent, EventBus};

#[derive(Clone)]
pub struct OverlayFeed {
    bus: Arc<EventBus>,
}

impl OverlayFeed {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self { bus }
    }

    pub async fn feed(&self, html: impl Into<String>) {
        self.bus
            .publish(BotEvent::OverlayFeed {
                html: html.into(),
                timestamp: Utc::now(),
            })
            .await;
    }
}
