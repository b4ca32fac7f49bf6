use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use coinbot_common::traits::repository_traits::BotConfigRepository;

use crate::Error;

/// Key/value store for runtime settings (the market state lives here under
/// the `market_state` key).
#[derive(Clone)]
pub struct PostgresBotConfigRepository {
    pool: Pool<Postgres>,
}

impl PostgresBotConfigRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BotConfigRepository for PostgresBotConfigRepository {
    async fn set_value(&self, config_key: &str, config_value: &str) -> Result<(), Error> {
        sqlx::query(
            r#"
            INSERT INTO bot_config (config_key, config_value)
            VALUES ($1, $2)
            ON CONFLICT (config_key)
            DO UPDATE SET config_value = EXCLUDED.config_value
            "#,
        )
        .bind(config_key)
        .bind(config_value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_value(&self, config_key: &str) -> Result<Option<String>, Error> {
        let row = sqlx::query(
            r#"
            SELECT config_value
            FROM bot_config
            WHERE config_key = $1
            "#,
        )
        .bind(config_key)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(r) = row {
            Ok(Some(r.try_get("config_value")?))
        } else {
            Ok(None)
        }
    }

    async fn delete_value(&self, config_key: &str) -> Result<(), Error> {
        sqlx::query(
            r#"
            DELETE FROM bot_config
            WHERE config_key = $1
            "#,
        )
        .bind(config_key)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
