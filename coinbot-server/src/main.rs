use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use coinbot_core::economy::CoinBank;
use coinbot_core::eventbus::{BotEvent, EventBus};
use coinbot_core::platforms::twitch_irc::{TwitchChattersClient, TwitchIrcPlatform};
use coinbot_core::platforms::{ChatPlatform, PlatformIntegration};
use coinbot_core::repositories::{PostgresBotConfigRepository, PostgresPlayerRepository};
use coinbot_core::services::{
    BotDeps, ChatBotService, CommandService, IrcMessageSender, OverlayFeed, ParticipantRegistry,
    PayoutCoordinator,
};
use coinbot_core::{Database, Error};

mod config;
use config::Config;

#[derive(Parser, Debug, Clone)]
#[command(name = "coinbot")]
#[command(author, version, about = "coinbot - chat-command economy bot for Twitch")]
struct Args {
    /// Postgres connection URL.
    #[arg(long, default_value = "postgres://coinbot@localhost:5432/coinbot")]
    db_path: String,
}

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("coinbot=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(sub)
        .expect("Failed to set global subscriber");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    dotenv::dotenv().ok();
    let args = Args::parse();
    let config = Config::from_env()?;
    info!(
        "coinbot starting. channel={}, silent={}, dev={}",
        config.channel, config.silent_mode, config.dev_mode
    );

    if let Err(e) = run_server(args, config).await {
        error!("Server error: {:?}", e);
    }
    Ok(())
}

async fn run_server(args: Args, config: Config) -> Result<(), Error> {
    let db = Database::new(&args.db_path).await?;
    db.migrate().await?;

    let players = Arc::new(PostgresPlayerRepository::new(db.pool().clone()));
    let bot_config = Arc::new(PostgresBotConfigRepository::new(db.pool().clone()));
    let economy = Arc::new(CoinBank::new(players.clone()));

    let event_bus = Arc::new(EventBus::new());
    let overlay = OverlayFeed::new(event_bus.clone());
    spawn_overlay_logger(&event_bus).await;

    let chatters = Arc::new(TwitchChattersClient::new(
        &config.chatters_api_base,
        &config.channel,
    ));

    // Transport up first so the reply channel has a live handle.
    let mut platform = TwitchIrcPlatform::new(&config.bot_username, &config.oauth_token);
    platform.connect().await?;
    platform.join_channel(&config.channel).await?;
    let events = platform
        .take_event_stream()
        .ok_or_else(|| Error::Platform("transport produced no event stream".into()))?;
    let irc_sender = platform
        .sender()
        .ok_or_else(|| Error::Platform("transport produced no sender".into()))?;

    let responder = Arc::new(IrcMessageSender::new(
        irc_sender,
        &config.bot_username,
        config.silent_mode,
    ));

    let payout = PayoutCoordinator::new(chatters.clone(), economy.clone(), overlay.clone());
    let deps = Arc::new(BotDeps {
        economy,
        players: players.clone(),
        bot_config,
        chatters,
        responder,
        overlay,
        payout,
        dev_mode: config.dev_mode,
    });

    let registry = Arc::new(ParticipantRegistry::new(players));
    let known = registry.warm_start().await?;
    info!("{} players preloaded from storage", known);

    let commands = Arc::new(CommandService::new(deps));
    info!("{} chat commands registered", commands.command_names().len());
    let service = Arc::new(ChatBotService::new(registry, commands, event_bus.clone()));

    let run_handle = tokio::spawn(service.run(events));

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    event_bus.shutdown();
    platform.disconnect().await?;
    run_handle.abort();
    Ok(())
}

/// Until an overlay transport subscribes for real, feed entries go to the
/// log so payouts and jackpots stay visible.
async fn spawn_overlay_logger(event_bus: &Arc<EventBus>) {
    let mut rx = event_bus.subscribe(None).await;
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if let BotEvent::OverlayFeed { html, .. } = event {
                info!("[feed] {}", html);
            }
        }
    });
}
