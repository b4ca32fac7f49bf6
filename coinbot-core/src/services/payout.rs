//! Batched payouts: one grant per unique chatter, one feed entry per
//! payout event. A failed grant aborts the batch and propagates; partial
//! success is never reported as success.

use std::sync::Arc;

use tracing::debug;

use coinbot_common::traits::economy_traits::EconomyService;

use crate::platforms::twitch_irc::ChatterSource;
use crate::services::overlay::OverlayFeed;
use crate::Error;

pub const SUBSCRIPTION_BONUS: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutReceipt {
    pub recipients: usize,
}

#[derive(Clone)]
pub struct PayoutCoordinator {
    chatters: Arc<dyn ChatterSource>,
    economy: Arc<dyn EconomyService>,
    overlay: OverlayFeed,
}

impl PayoutCoordinator {
    pub fn new(
        chatters: Arc<dyn ChatterSource>,
        economy: Arc<dyn EconomyService>,
        overlay: OverlayFeed,
    ) -> Self {
        Self {
            chatters,
            economy,
            overlay,
        }
    }

    /// Grants `amount` to every unique chatter currently present, credits
    /// `attributed_to` as the trigger on the feed, and returns the count.
    pub async fn run_payout(&self, amount: i64, attributed_to: &str) -> Result<PayoutReceipt, Error> {
        let snapshot = self.chatters.fetch().await?;
        let recipients = snapshot.merged_unique();
        debug!("payout => {} unique recipients", recipients.len());

        self.economy.grant_to_list(&recipients, amount).await?;

        self.overlay
            .feed(format!(
                "<i class=\"fas fa-gift\"></i> <b class=\"badge bg-info\">{}</b> chatters received {} coin(s) <i class=\"fas fa-coins\"></i> thanks to <b class=\"badge bg-primary\">{}</b>",
                recipients.len(),
                amount,
                attributed_to
            ))
            .await;

        Ok(PayoutReceipt {
            recipients: recipients.len(),
        })
    }

    /// Simulated/real subscription: the subscriber gets a fixed bonus and
    /// everyone present gets 1 coin in their honor.
    pub async fn subscription_payout(&self, username: &str) -> Result<PayoutReceipt, Error> {
        self.economy.grant(username, SUBSCRIPTION_BONUS).await?;

        self.overlay
            .feed(format!(
                "<b class=\"badge bg-primary\">{}</b> received <i class=\"fas fa-coins\"></i> {} coins for subscribing",
                username, SUBSCRIPTION_BONUS
            ))
            .await;

        self.run_payout(1, username).await
    }
}
