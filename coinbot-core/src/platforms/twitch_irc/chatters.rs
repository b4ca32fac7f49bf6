//! src/platforms/twitch_irc/chatters.rs
//!
//! Who is in the channel right now. One unauthenticated GET per call, no
//! caching; payouts always see a fresh snapshot.

use async_trait::async_trait;
use serde::Deserialize;

use coinbot_common::models::chatter::ChatterSnapshot;

use crate::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatterSource: Send + Sync {
    async fn fetch(&self) -> Result<ChatterSnapshot, Error>;
}

#[derive(Debug, Deserialize)]
struct ChattersResponse {
    chatters: ChattersBody,
}

#[derive(Debug, Deserialize)]
struct ChattersBody {
    #[serde(default)]
    viewers: Vec<String>,
    #[serde(default)]
    moderators: Vec<String>,
    #[serde(default)]
    vips: Vec<String>,
}

pub struct TwitchChattersClient {
    http: reqwest::Client,
    base_url: String,
    channel: String,
}

impl TwitchChattersClient {
    /// `channel` is the bare channel name, without the IRC `#`.
    pub fn new(base_url: &str, channel: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            channel: channel.trim_start_matches('#').to_string(),
        }
    }
}

#[async_trait]
impl ChatterSource for TwitchChattersClient {
    async fn fetch(&self) -> Result<ChatterSnapshot, Error> {
        let url = format!("{}/group/user/{}/chatters", self.base_url, self.channel);
        let body: ChattersResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(ChatterSnapshot {
            viewers: body.chatters.viewers,
            moderators: body.chatters.moderators,
            vips: body.chatters.vips,
        })
    }
}
