//! Coin balance arithmetic and the wager roll, behind `EconomyService`.
//!
//! The odds below are a minimal stand-in: 1% jackpot at 10x, 49% even win.
//! Anything smarter belongs behind the same trait, invisible to dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use coinbot_common::models::wager::WagerOutcome;
use coinbot_common::traits::economy_traits::EconomyService;
use coinbot_common::traits::repository_traits::PlayerRepository;

use crate::Error;

const JACKPOT_CHANCE_PCT: u32 = 1;
const WIN_CHANCE_PCT: u32 = 49;
const JACKPOT_MULTIPLIER: i64 = 10;

pub struct CoinBank {
    players: Arc<dyn PlayerRepository>,
}

impl CoinBank {
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self { players }
    }

    async fn wager(&self, username: &str, bet: i64) -> Result<WagerOutcome, Error> {
        if bet <= 0 {
            return Err(Error::InsufficientCoins);
        }
        let player = self
            .players
            .get_by_username(username)
            .await?
            .ok_or(Error::InsufficientCoins)?;
        if player.coins < bet {
            return Err(Error::InsufficientCoins);
        }

        let roll: u32 = rand::rng().random_range(0..100);
        let outcome = if roll < JACKPOT_CHANCE_PCT {
            let win = bet * JACKPOT_MULTIPLIER;
            WagerOutcome::WinJackpot {
                bet,
                win,
                balance: player.coins + win,
            }
        } else if roll < JACKPOT_CHANCE_PCT + WIN_CHANCE_PCT {
            WagerOutcome::Win {
                bet,
                win: bet,
                balance: player.coins + bet,
            }
        } else {
            WagerOutcome::Lose {
                bet,
                balance: player.coins - bet,
            }
        };

        self.players
            .update_coins(&player.username, outcome.balance())
            .await?;
        Ok(outcome)
    }
}

#[async_trait]
impl EconomyService for CoinBank {
    async fn balance(&self, username: &str) -> Result<Option<i64>, Error> {
        let player = self.players.get_by_username(username).await?;
        Ok(player.map(|p| p.coins))
    }

    async fn grant(&self, username: &str, amount: i64) -> Result<i64, Error> {
        let player = self
            .players
            .get_by_username(username)
            .await?
            .ok_or_else(|| Error::NotFound(format!("no player '{}'", username)))?;
        let new_balance = player.coins + amount;
        self.players.update_coins(&player.username, new_balance).await?;
        Ok(new_balance)
    }

    async fn grant_to_list(&self, usernames: &[String], amount: i64) -> Result<(), Error> {
        for name in usernames {
            // Payout audiences come from the live chatter list, which is a
            // superset of known players; missing accounts get created here.
            if self.players.get_by_username(name).await?.is_none() {
                self.players.create_player(name).await?;
            }
            self.grant(name, amount).await?;
        }
        Ok(())
    }

    async fn all_in(&self, username: &str) -> Result<WagerOutcome, Error> {
        let balance = self
            .balance(username)
            .await?
            .ok_or(Error::InsufficientCoins)?;
        self.wager(username, balance).await
    }

    async fn gacha(&self, username: &str, amount: i64) -> Result<WagerOutcome, Error> {
        self.wager(username, amount).await
    }
}
