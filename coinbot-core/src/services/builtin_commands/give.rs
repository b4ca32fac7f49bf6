use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::services::command_service::{CommandContext, CommandFuture};

// One username token, then an integer token. Anything else is a no-op.
static GIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\S+)\s+(\d+)").unwrap());

pub(crate) fn parse_give_args(joined: &str) -> Option<(String, i64)> {
    let caps = GIVE_RE.captures(joined)?;
    let target = caps.get(1)?.as_str().to_string();
    let amount = caps.get(2)?.as_str().parse::<i64>().ok()?;
    Some((target, amount))
}

/// `!give <target> <amount>`: transfers conjured coins to another player.
/// Malformed arguments and grant failures are deliberately silent toward
/// chat; both leave a debug trace.
pub fn give(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move {
        let Some((target, amount)) = parse_give_args(&ctx.joined_args()) else {
            debug!("!give from '{}' with unusable args '{}'", ctx.sender, ctx.joined_args());
            return Ok(());
        };

        match ctx.deps.economy.grant(&target, amount).await {
            Ok(balance) => {
                ctx.say(&format!(
                    "@{} conjured {} coins for {} ({}).",
                    ctx.sender, amount, target, balance
                ))
                .await
            }
            Err(e) => {
                debug!("!give {} {} from '{}' failed: {:?}", target, amount, ctx.sender, e);
                Ok(())
            }
        }
    })
}
