use async_trait::async_trait;

use crate::error::Error;
use crate::models::wager::WagerOutcome;

/// The economic operations the dispatcher consumes. Implementations own
/// balance arithmetic and the wager roll; the dispatcher only interprets
/// the results.
#[async_trait]
pub trait EconomyService: Send + Sync {
    /// Current balance, or `None` for a username we have no account for.
    async fn balance(&self, username: &str) -> Result<Option<i64>, Error>;

    /// Credits `amount` to an existing player and returns the new balance.
    /// Fails with `Error::NotFound` for unknown targets.
    async fn grant(&self, username: &str, amount: i64) -> Result<i64, Error>;

    /// One grant per name, as a single logical batch. Names without an
    /// account get one created first. The first failure aborts the batch
    /// and propagates; the coordinator never reports partial success.
    async fn grant_to_list(&self, usernames: &[String], amount: i64) -> Result<(), Error>;

    /// Wagers the caller's entire balance.
    async fn all_in(&self, username: &str) -> Result<WagerOutcome, Error>;

    /// Wagers a chosen amount. Non-positive amounts and bets the balance
    /// cannot cover fail with `Error::InsufficientCoins`.
    async fn gacha(&self, username: &str, amount: i64) -> Result<WagerOutcome, Error>;
}
