//! The chat-reply channel. In silent mode replies become log lines; grants
//! and feed entries are unaffected.

use async_trait::async_trait;
use tracing::info;

use crate::platforms::twitch_irc::IrcSender;
use crate::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn say(&self, channel: &str, text: &str) -> Result<(), Error>;
}

pub struct IrcMessageSender {
    irc: IrcSender,
    bot_name: String,
    silent: bool,
}

impl IrcMessageSender {
    pub fn new(irc: IrcSender, bot_name: &str, silent: bool) -> Self {
        Self {
            irc,
            bot_name: bot_name.to_string(),
            silent,
        }
    }
}

#[async_trait]
impl ChatResponder for IrcMessageSender {
    async fn say(&self, channel: &str, text: &str) -> Result<(), Error> {
        if self.silent {
            info!("[Silent Mode] {}: {}", self.bot_name, text);
            return Ok(());
        }
        self.irc.send_privmsg(channel, text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn sender_pair() -> (IrcSender, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (IrcSender { raw_outgoing: tx }, rx)
    }

    #[tokio::test]
    async fn normal_mode_sends_a_privmsg() {
        let (irc, mut rx) = sender_pair();
        let sender = IrcMessageSender::new(irc, "coinbot", false);

        sender.say("#chan", "hello").await.unwrap();

        assert_eq!(rx.try_recv().unwrap(), "PRIVMSG #chan :hello");
    }

    #[tokio::test]
    async fn silent_mode_never_touches_the_wire() {
        let (irc, mut rx) = sender_pair();
        let sender = IrcMessageSender::new(irc, "coinbot", true);

        sender.say("#chan", "hello").await.unwrap();

        assert!(rx.try_recv().is_err());
    }
}
