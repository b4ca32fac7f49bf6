//! src/platforms/twitch_irc/runtime.rs

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::platforms::{ChatPlatform, ConnectionStatus, PlatformAuth, PlatformIntegration};
use crate::Error;

use super::client::{IrcSender, TwitchIrcClient};

/// What the transport hands the dispatcher. `is_self` marks echoes of the
/// bot's own traffic; the dispatcher must ignore those entirely.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    Connected,
    Join { channel: String, user: String },
    Part { channel: String, user: String },
    Message { channel: String, user: String, text: String, is_self: bool },
}

pub struct TwitchIrcPlatform {
    login: String,
    oauth_token: String,
    pub connection_status: ConnectionStatus,

    client: Option<TwitchIrcClient>,

    /// The read loop that converts raw IRC events into `ChatEvent`s.
    read_loop_handle: Option<JoinHandle<()>>,

    rx: Option<mpsc::Receiver<ChatEvent>>,
    tx: Option<mpsc::Sender<ChatEvent>>,
}

impl TwitchIrcPlatform {
    pub fn new(login: &str, oauth_token: &str) -> Self {
        Self {
            login: login.to_lowercase(),
            oauth_token: oauth_token.to_string(),
            connection_status: ConnectionStatus::Disconnected,
            client: None,
            read_loop_handle: None,
            rx: None,
            tx: None,
        }
    }

    /// Takes the event stream; the ChatBotService consumes this.
    pub fn take_event_stream(&mut self) -> Option<mpsc::Receiver<ChatEvent>> {
        self.rx.take()
    }

    /// Handle for outbound lines, for the message sender.
    pub fn sender(&self) -> Option<IrcSender> {
        self.client.as_ref().map(|c| c.sender())
    }
}

#[async_trait]
impl PlatformAuth for TwitchIrcPlatform {
    async fn authenticate(&mut self) -> Result<(), Error> {
        // The oauth token is supplied up front; PASS/NICK happens in connect().
        if !self.oauth_token.starts_with("oauth:") {
            return Err(Error::Platform("Twitch IRC token must start with 'oauth:'".into()));
        }
        Ok(())
    }

    async fn revoke_auth(&mut self) -> Result<(), Error> {
        self.oauth_token.clear();
        Ok(())
    }

    async fn is_authenticated(&self) -> Result<bool, Error> {
        Ok(!self.oauth_token.is_empty())
    }
}

#[async_trait]
impl PlatformIntegration for TwitchIrcPlatform {
    async fn connect(&mut self) -> Result<(), Error> {
        if self.client.is_some() {
            info!("(TwitchIrcPlatform) connect => already connected");
            return Ok(());
        }
        self.authenticate().await?;

        let (tx_evt, rx_evt) = mpsc::channel::<ChatEvent>(1000);
        self.tx = Some(tx_evt);
        self.rx = Some(rx_evt);

        let mut client = TwitchIrcClient::connect(&self.login, &self.oauth_token)
            .await
            .map_err(|e| {
                let msg = format!("Twitch IRC connect failed => {}", e);
                self.connection_status = ConnectionStatus::Error(msg.clone());
                Error::Platform(msg)
            })?;

        let mut irc_incoming = client
            .incoming
            .take()
            .ok_or_else(|| Error::Platform("No incoming channel in TwitchIrcClient".into()))?;
        self.client = Some(client);
        self.connection_status = ConnectionStatus::Connected;

        let tx_for_task = self.tx.as_ref().unwrap().clone();
        let own_login = self.login.clone();

        let handle = tokio::spawn(async move {
            while let Some(evt) = irc_incoming.recv().await {
                let mapped = match evt.command.as_str() {
                    "001" => Some(ChatEvent::Connected),
                    "JOIN" => match (evt.channel, evt.login) {
                        (Some(channel), Some(user)) => Some(ChatEvent::Join { channel, user }),
                        _ => None,
                    },
                    "PART" => match (evt.channel, evt.login) {
                        (Some(channel), Some(user)) => Some(ChatEvent::Part { channel, user }),
                        _ => None,
                    },
                    "PRIVMSG" => match (evt.channel, evt.login, evt.text) {
                        (Some(channel), Some(user), Some(text)) => {
                            let is_self = user.eq_ignore_ascii_case(&own_login);
                            Some(ChatEvent::Message { channel, user, text, is_self })
                        }
                        _ => None,
                    },
                    _ => None,
                };
                if let Some(event) = mapped {
                    let _ = tx_for_task.send(event).await;
                }
            }
            info!("(TwitchIrcPlatform) read loop ended.");
        });
        self.read_loop_handle = Some(handle);

        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), Error> {
        self.connection_status = ConnectionStatus::Disconnected;

        if let Some(cli) = self.client.take() {
            cli.shutdown();
        }
        if let Some(h) = self.read_loop_handle.take() {
            h.abort();
        }

        Ok(())
    }

    async fn send_message(&self, channel: &str, message: &str) -> Result<(), Error> {
        if let Some(cli) = &self.client {
            cli.sender().send_privmsg(channel, message);
            Ok(())
        } else {
            Err(Error::Platform("No active Twitch IRC connection".into()))
        }
    }

    async fn get_connection_status(&self) -> Result<ConnectionStatus, Error> {
        Ok(self.connection_status.clone())
    }
}

#[async_trait]
impl ChatPlatform for TwitchIrcPlatform {
    async fn join_channel(&self, channel: &str) -> Result<(), Error> {
        if let Some(cli) = &self.client {
            cli.sender().join_channel(channel);
            Ok(())
        } else {
            Err(Error::Platform("No active IRC client connection".into()))
        }
    }

    async fn leave_channel(&self, channel: &str) -> Result<(), Error> {
        if let Some(cli) = &self.client {
            cli.sender().part_channel(channel);
            Ok(())
        } else {
            Err(Error::Platform("No active IRC client connection".into()))
        }
    }
}
