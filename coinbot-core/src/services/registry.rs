//! In-memory set of known chat participants, used to avoid duplicate
//! account creation. Process-scoped: names are never removed.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use coinbot_common::traits::repository_traits::PlayerRepository;

use crate::Error;

pub struct ParticipantRegistry {
    known: DashMap<String, ()>,
    players: Arc<dyn PlayerRepository>,
}

impl ParticipantRegistry {
    pub fn new(players: Arc<dyn PlayerRepository>) -> Self {
        Self {
            known: DashMap::new(),
            players,
        }
    }

    /// Pre-populates the membership set from storage so users already on
    /// record are never re-created. Call once at service start.
    pub async fn warm_start(&self) -> Result<usize, Error> {
        let names = self.players.list_usernames().await?;
        for name in &names {
            self.known.insert(name.to_lowercase(), ());
        }
        debug!("registry warm start => {} known participants", self.known.len());
        Ok(names.len())
    }

    /// Idempotent registration with an at-most-one-creation guarantee: the
    /// atomic insert decides a single winner, so two near-simultaneous
    /// events from the same new user cannot both call `create_player`.
    /// A failed creation removes the key again so a later event retries.
    pub async fn ensure_registered(&self, username: &str) -> Result<(), Error> {
        let key = username.to_lowercase();
        if self.known.insert(key.clone(), ()).is_some() {
            return Ok(());
        }
        if let Err(e) = self.players.create_player(username).await {
            self.known.remove(&key);
            return Err(e);
        }
        debug!("registered new participant '{}'", key);
        Ok(())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.known.contains_key(&username.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}
