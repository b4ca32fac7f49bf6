use async_trait::async_trait;

use crate::error::Error;
use crate::models::player::Player;

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Inserts a fresh zero-balance row for `username` (stored lowercase)
    /// and returns it. Callers are expected to guard against duplicates;
    /// a second insert for the same name is a database error.
    async fn create_player(&self, username: &str) -> Result<Player, Error>;

    /// Case-insensitive lookup.
    async fn get_by_username(&self, username: &str) -> Result<Option<Player>, Error>;

    /// Every known username, for the registry warm start.
    async fn list_usernames(&self) -> Result<Vec<String>, Error>;

    async fn update_coins(&self, username: &str, coins: i64) -> Result<(), Error>;
}

#[async_trait]
pub trait BotConfigRepository: Send + Sync {
    async fn set_value(&self, config_key: &str, config_value: &str) -> Result<(), Error>;

    async fn get_value(&self, config_key: &str) -> Result<Option<String>, Error>;

    async fn delete_value(&self, config_key: &str) -> Result<(), Error>;
}
