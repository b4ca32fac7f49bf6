use tracing::{debug, info};

use crate::services::command_service::{CommandContext, CommandFuture};

const PROJECT_URL: &str = "https://github.com/coinbot-dev/coinbot";

/// `!github`: static pointer at the bot's source.
pub fn github(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move { ctx.say(PROJECT_URL).await })
}

/// `!fetch`: development helper that logs the current chatter snapshot.
pub fn fetch(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move {
        let snapshot = ctx.deps.chatters.fetch().await?;
        info!(
            "chatters => {} viewers, {} moderators, {} vips",
            snapshot.viewers.len(),
            snapshot.moderators.len(),
            snapshot.vips.len()
        );
        Ok(())
    })
}

/// Recognized commands with no behavior yet.
pub fn not_implemented(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move {
        debug!("'{}' is not implemented yet", ctx.name);
        Ok(())
    })
}
