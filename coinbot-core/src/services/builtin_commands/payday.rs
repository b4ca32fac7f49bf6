use tracing::debug;

use crate::services::command_service::{CommandContext, CommandFuture};
use crate::services::payout::SUBSCRIPTION_BONUS;

/// `!payday`: admin-only, 1 coin to everyone present. Non-admin callers
/// are silently ignored.
pub fn payday(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move {
        let caller = ctx.deps.players.get_by_username(&ctx.sender).await?;
        let is_admin = caller.map(|p| p.is_admin).unwrap_or(false);
        if !is_admin {
            debug!("!payday from non-admin '{}' ignored", ctx.sender);
            return Ok(());
        }

        ctx.deps.payout.run_payout(1, &ctx.sender).await?;
        Ok(())
    })
}

/// `!payout`: dev-mode stand-in for a subscription event: the caller gets
/// the subscriber bonus and everyone present gets 1 coin.
pub fn payout(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move {
        if !ctx.deps.dev_mode {
            return Ok(());
        }

        let receipt = ctx.deps.payout.subscription_payout(&ctx.sender).await?;
        ctx.say(&format!(
            "{} received {} coins for subscribing and {} chatters received 1 coin.",
            ctx.sender, SUBSCRIPTION_BONUS, receipt.recipients
        ))
        .await
    })
}
