// src/repositories/postgres/player.rs

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use coinbot_common::models::player::Player;
use coinbot_common::traits::repository_traits::PlayerRepository;

use crate::Error;

pub struct PostgresPlayerRepository {
    pub pool: Pool<Postgres>,
}

impl PostgresPlayerRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn create_player(&self, username: &str) -> Result<Player, Error> {
        let player = Player::new(username);
        sqlx::query(
            r#"
            INSERT INTO players (
                player_id, username, coins, is_admin, created_at, last_seen
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(player.player_id)
        .bind(&player.username)
        .bind(player.coins)
        .bind(player.is_admin)
        .bind(player.created_at)
        .bind(player.last_seen)
        .execute(&self.pool)
        .await?;
        Ok(player)
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<Player>, Error> {
        let row = sqlx::query_as::<_, Player>(
            r#"
            SELECT player_id,
                   username,
                   coins,
                   is_admin,
                   created_at,
                   last_seen
            FROM players
            WHERE username = LOWER($1)
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_usernames(&self) -> Result<Vec<String>, Error> {
        let rows = sqlx::query(
            r#"
            SELECT username
            FROM players
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(row.try_get("username")?);
        }
        Ok(out)
    }

    async fn update_coins(&self, username: &str, coins: i64) -> Result<(), Error> {
        sqlx::query(
            r#"
            UPDATE players
            SET coins = $1,
                last_seen = NOW()
            WHERE username = LOWER($2)
            "#,
        )
        .bind(coins)
        .bind(username)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
