use crate::services::command_service::{CommandContext, CommandFuture};

/// `!coin`: balance query. Unknown players read as a zero balance.
pub fn coin(ctx: CommandContext) -> CommandFuture {
    Box::pin(async move {
        match ctx.deps.economy.balance(&ctx.sender).await? {
            Some(balance) => {
                ctx.say(&format!("@{} has {} coins.", ctx.sender, balance)).await
            }
            None => ctx.say(&format!("@{} has 0 coins.", ctx.sender)).await,
        }
    })
}
