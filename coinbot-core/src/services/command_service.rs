//! Command routing: an explicit name -> handler table, built once.
//! Unknown names are a deliberate no-op, not an error.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::debug;

use coinbot_common::models::command::ChatCommand;
use coinbot_common::traits::economy_traits::EconomyService;
use coinbot_common::traits::repository_traits::{BotConfigRepository, PlayerRepository};

use crate::platforms::twitch_irc::ChatterSource;
use crate::services::builtin_commands;
use crate::services::message_sender::ChatResponder;
use crate::services::overlay::OverlayFeed;
use crate::services::payout::PayoutCoordinator;
use crate::Error;

/// Everything handlers may touch, behind trait seams so each handler is
/// testable in isolation.
pub struct BotDeps {
    pub economy: Arc<dyn EconomyService>,
    pub players: Arc<dyn PlayerRepository>,
    pub bot_config: Arc<dyn BotConfigRepository>,
    pub chatters: Arc<dyn ChatterSource>,
    pub responder: Arc<dyn ChatResponder>,
    pub overlay: OverlayFeed,
    pub payout: PayoutCoordinator,
    pub dev_mode: bool,
}

/// Per-dispatch context handed to a handler.
pub struct CommandContext {
    pub name: String,
    pub channel: String,
    pub sender: String,
    pub args: Vec<String>,
    pub deps: Arc<BotDeps>,
}

impl CommandContext {
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }

    pub async fn say(&self, text: &str) -> Result<(), Error> {
        self.deps.responder.say(&self.channel, text).await
    }
}

pub type CommandFuture = Pin<Box<dyn Future<Output = Result<(), Error>> + Send>>;
pub type CommandFn = fn(CommandContext) -> CommandFuture;

pub struct CommandService {
    handlers: HashMap<&'static str, CommandFn>,
    deps: Arc<BotDeps>,
}

impl CommandService {
    pub fn new(deps: Arc<BotDeps>) -> Self {
        Self {
            handlers: builtin_commands::command_table(),
            deps,
        }
    }

    /// Names the service will dispatch, for diagnostics.
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Parses one chat line and runs the matching handler, if any.
    pub async fn dispatch(&self, channel: &str, sender: &str, text: &str) -> Result<(), Error> {
        let Some(cmd) = ChatCommand::parse(text) else {
            return Ok(());
        };
        let Some(handler) = self.handlers.get(cmd.name.as_str()) else {
            debug!("no handler for '{}'", cmd.name);
            return Ok(());
        };

        let ctx = CommandContext {
            name: cmd.name,
            channel: channel.to_string(),
            sender: sender.to_string(),
            args: cmd.args,
            deps: self.deps.clone(),
        };
        handler(ctx).await
    }
}
