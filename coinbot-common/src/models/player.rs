use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One account row. `username` is stored lowercase and is the identity key
/// for everything chat-facing; display casing is whatever chat sent us.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Player {
    pub player_id: Uuid,
    pub username: String,
    pub coins: i64,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Player {
    pub fn new(username: &str) -> Self {
        let now = Utc::now();
        Self {
            player_id: Uuid::new_v4(),
            username: username.to_lowercase(),
            coins: 0,
            is_admin: false,
            created_at: now,
            last_seen: now,
        }
    }
}
