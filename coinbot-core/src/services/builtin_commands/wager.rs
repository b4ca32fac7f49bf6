use once_cell::sync::Lazy;
use regex::Regex;

use coinbot_common::models::wager::WagerOutcome;

use crate::services::command_service::{CommandContext, CommandFuture};
use crate::services::notifier::{render_wager_outcome, WagerKind};
use crate::Error;

const DEFAULT_GACHA_BET: i64 = 1;

// Leading signed integer anywhere in the first argument ("5", "-3", "x10").
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(-?\d+)").unwrap());

pub(crate) fn parse_wager_amount(arg: Option<&str>) -> i64 {
    arg.and_then(|a| AMOUNT_RE.captures(a))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(DEFAULT_GACHA_BET)
}

/// `!allin`: wager the entire balance.
pub fn allin(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move { run_wager(ctx, WagerKind::AllIn).await })
}

/// `!gacha [amount]`: wager a chosen amount, defaulting to 1.
pub fn gacha(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move { run_wager(ctx, WagerKind::Gacha).await })
}

async fn run_wager(ctx: CommandContext, kind: WagerKind) -> Result<(), Error> {
    let result = match kind {
        WagerKind::AllIn => ctx.deps.economy.all_in(&ctx.sender).await,
        WagerKind::Gacha => {
            let amount = parse_wager_amount(ctx.args.first().map(String::as_str));
            ctx.deps.economy.gacha(&ctx.sender, amount).await
        }
    };

    let outcome: WagerOutcome = match result {
        Ok(outcome) => outcome,
        Err(Error::InsufficientCoins) => {
            // Precondition failure, not a lose: reply only, no feed entry.
            return ctx.say(&format!("@{} doesn't have enough coins!", ctx.sender)).await;
        }
        Err(e) => return Err(e),
    };

    let notice = render_wager_outcome(kind, &ctx.sender, &outcome);
    ctx.say(&notice.chat).await?;
    ctx.deps.overlay.feed(notice.feed).await;
    Ok(())
}
