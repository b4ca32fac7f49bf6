//! The orchestrator: consumes transport events, keeps the participant
//! registry in sync, and hands command-shaped messages to the dispatcher.
//! Every Join/Message is its own task; a stalled handler never holds up
//! unrelated events.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::eventbus::EventBus;
use crate::platforms::twitch_irc::ChatEvent;
use crate::services::command_service::CommandService;
use crate::services::registry::ParticipantRegistry;
use crate::Error;

pub struct ChatBotService {
    registry: Arc<ParticipantRegistry>,
    commands: Arc<CommandService>,
    event_bus: Arc<EventBus>,
}

impl ChatBotService {
    pub fn new(
        registry: Arc<ParticipantRegistry>,
        commands: Arc<CommandService>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            registry,
            commands,
            event_bus,
        }
    }

    /// Drives the service until the transport closes its event stream.
    pub async fn run(self: Arc<Self>, mut events: tokio::sync::mpsc::Receiver<ChatEvent>) {
        while let Some(event) = events.recv().await {
            self.clone().handle_event(event);
        }
        info!("chat event stream closed");
    }

    /// Dispatches one transport event. Echoes of the bot's own messages
    /// are dropped before they can touch the registry or any handler.
    pub fn handle_event(self: Arc<Self>, event: ChatEvent) {
        match event {
            ChatEvent::Connected => {
                info!("Connected to Twitch");
            }
            ChatEvent::Join { user, .. } => {
                let svc = self;
                tokio::spawn(async move {
                    if let Err(e) = svc.registry.ensure_registered(&user).await {
                        error!("failed to register '{}': {:?}", user, e);
                    }
                });
            }
            ChatEvent::Part { user, .. } => {
                debug!("{} left...", user);
            }
            ChatEvent::Message { channel, user, text, is_self } => {
                if is_self {
                    return;
                }
                let svc = self;
                tokio::spawn(async move {
                    if let Err(e) = svc.handle_message(&channel, &user, &text).await {
                        error!("error handling message from '{}': {:?}", user, e);
                    }
                });
            }
        }
    }

    pub async fn handle_message(&self, channel: &str, user: &str, text: &str) -> Result<(), Error> {
        self.registry.ensure_registered(user).await?;
        self.event_bus.publish_chat(channel, user, text).await;
        self.commands.dispatch(channel, user, text).await
    }
}
