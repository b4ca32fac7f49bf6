use coinbot_common::models::market::MarketState;

use crate::services::command_service::{CommandContext, CommandFuture};

pub(crate) const MARKET_STATE_KEY: &str = "market_state";

/// `!market open` / `!market close`: flips the market flag and announces
/// it on the feed only. Never replies in chat; other arguments are no-ops.
pub fn market(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move {
        let Some(state) = ctx.args.first().and_then(|a| MarketState::from_str(a)) else {
            return Ok(());
        };

        ctx.deps
            .bot_config
            .set_value(MARKET_STATE_KEY, state.as_str())
            .await?;

        let announcement = match state {
            MarketState::Open => {
                "<i class=\"fas fa-shopping-bag\"></i> The market is open, come and get it!"
            }
            MarketState::Closed => "<i class=\"fas fa-stop-circle\"></i> Market closed!",
        };
        ctx.deps.overlay.feed(announcement).await;
        Ok(())
    })
}
