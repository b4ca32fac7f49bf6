// tests/helpers.rs
//
// Shared test doubles: mockall mocks for the trait seams, a recording
// responder for chat replies, and a pre-subscribed feed receiver so tests
// can assert on overlay entries.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::mpsc;

use coinbot_common::models::chatter::ChatterSnapshot;
use coinbot_common::models::player::Player;
use coinbot_common::models::wager::WagerOutcome;
use coinbot_common::traits::economy_traits::EconomyService;
use coinbot_common::traits::repository_traits::{BotConfigRepository, PlayerRepository};
use coinbot_core::eventbus::{BotEvent, EventBus};
use coinbot_core::platforms::twitch_irc::ChatterSource;
use coinbot_core::services::{BotDeps, ChatResponder, OverlayFeed, PayoutCoordinator};
use coinbot_core::Error;

mock! {
    pub PlayerRepo {}

    #[async_trait]
    impl PlayerRepository for PlayerRepo {
        async fn create_player(&self, username: &str) -> Result<Player, Error>;
        async fn get_by_username(&self, username: &str) -> Result<Option<Player>, Error>;
        async fn list_usernames(&self) -> Result<Vec<String>, Error>;
        async fn update_coins(&self, username: &str, coins: i64) -> Result<(), Error>;
    }
}

mock! {
    pub Economy {}

    #[async_trait]
    impl EconomyService for Economy {
        async fn balance(&self, username: &str) -> Result<Option<i64>, Error>;
        async fn grant(&self, username: &str, amount: i64) -> Result<i64, Error>;
        async fn grant_to_list(&self, usernames: &[String], amount: i64) -> Result<(), Error>;
        async fn all_in(&self, username: &str) -> Result<WagerOutcome, Error>;
        async fn gacha(&self, username: &str, amount: i64) -> Result<WagerOutcome, Error>;
    }
}

mock! {
    pub BotConfig {}

    #[async_trait]
    impl BotConfigRepository for BotConfig {
        async fn set_value(&self, config_key: &str, config_value: &str) -> Result<(), Error>;
        async fn get_value(&self, config_key: &str) -> Result<Option<String>, Error>;
        async fn delete_value(&self, config_key: &str) -> Result<(), Error>;
    }
}

mock! {
    pub Chatters {}

    #[async_trait]
    impl ChatterSource for Chatters {
        async fn fetch(&self) -> Result<ChatterSnapshot, Error>;
    }
}

/// Captures everything `say` would have sent.
pub struct RecordingResponder {
    says: Mutex<Vec<(String, String)>>,
}

impl RecordingResponder {
    pub fn new() -> Self {
        Self {
            says: Mutex::new(vec![]),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.says.lock().unwrap().iter().map(|(_, t)| t.clone()).collect()
    }
}

#[async_trait]
impl ChatResponder for RecordingResponder {
    async fn say(&self, channel: &str, text: &str) -> Result<(), Error> {
        self.says
            .lock()
            .unwrap()
            .push((channel.to_string(), text.to_string()));
        Ok(())
    }
}

pub fn player_with_coins(username: &str, coins: i64) -> Player {
    let mut p = Player::new(username);
    p.coins = coins;
    p
}

pub fn admin_player(username: &str) -> Player {
    let mut p = Player::new(username);
    p.is_admin = true;
    p
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Assembles `BotDeps` around the given mocks. The returned receiver was
/// subscribed before anything can publish, so no feed entry is missed.
pub async fn build_deps(
    players: MockPlayerRepo,
    economy: MockEconomy,
    bot_config: MockBotConfig,
    chatters: MockChatters,
    dev_mode: bool,
) -> (Arc<BotDeps>, Arc<RecordingResponder>, mpsc::Receiver<BotEvent>) {
    let bus = Arc::new(EventBus::new());
    let feed_rx = bus.subscribe(Some(100)).await;
    let overlay = OverlayFeed::new(bus);

    let economy: Arc<dyn EconomyService> = Arc::new(economy);
    let chatters: Arc<dyn ChatterSource> = Arc::new(chatters);
    let responder = Arc::new(RecordingResponder::new());
    let payout = PayoutCoordinator::new(chatters.clone(), economy.clone(), overlay.clone());

    let deps = Arc::new(BotDeps {
        economy,
        players: Arc::new(players),
        bot_config: Arc::new(bot_config),
        chatters,
        responder: responder.clone(),
        overlay,
        payout,
        dev_mode,
    });
    (deps, responder, feed_rx)
}

/// Drains whatever overlay entries have been published so far.
pub fn drain_feed(rx: &mut mpsc::Receiver<BotEvent>) -> Vec<String> {
    let mut out = vec![];
    while let Ok(event) = rx.try_recv() {
        if let BotEvent::OverlayFeed { html, .. } = event {
            out.push(html);
        }
    }
    out
}
