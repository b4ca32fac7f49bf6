pub mod chatters;
pub mod client;
pub mod runtime;

pub use chatters::{ChatterSource, TwitchChattersClient};
pub use client::{IrcSender, TwitchIrcClient};
pub use runtime::{ChatEvent, TwitchIrcPlatform};
