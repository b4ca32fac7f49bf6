use coinbot_core::Error;

/// Environment configuration, read once at startup (after dotenv).
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_username: String,
    pub oauth_token: String,
    pub channel: String,
    pub chatters_api_base: String,
    pub silent_mode: bool,
    pub dev_mode: bool,
}

/// The flags accept the literals "1" and "true"; anything else is off.
fn env_flag(name: &str) -> bool {
    matches!(
        std::env::var(name).as_deref(),
        Ok("1") | Ok("true")
    )
}

fn required(name: &str) -> Result<String, Error> {
    std::env::var(name).map_err(|_| Error::Platform(format!("missing env var {}", name)))
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let channel = required("TWITCH_CHANNEL")?;
        Ok(Self {
            bot_username: required("TWITCH_BOT_USERNAME")?,
            oauth_token: required("TWITCH_OAUTH_TOKEN")?,
            channel: format!("#{}", channel.trim_start_matches('#')),
            chatters_api_base: required("CHATTERS_API_BASE")?,
            silent_mode: env_flag("SILENT_BOT_MODE"),
            dev_mode: env_flag("BOT_DEV_MODE"),
        })
    }
}
