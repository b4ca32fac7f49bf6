//! Built-in `!` commands. Each family lives in its own file; `command_table`
//! is the one place a name maps to a handler, so the set is statically
//! enumerable and each handler testable on its own.

pub mod coin;
pub mod give;
pub mod market;
pub mod misc;
pub mod payday;
pub mod wager;

use std::collections::HashMap;

use crate::services::command_service::CommandFn;

pub fn command_table() -> HashMap<&'static str, CommandFn> {
    let mut table: HashMap<&'static str, CommandFn> = HashMap::new();

    table.insert("!coin", coin::coin as CommandFn);
    table.insert("!give", give::give as CommandFn);
    table.insert("!allin", wager::allin as CommandFn);
    table.insert("!gacha", wager::gacha as CommandFn);
    table.insert("!market", market::market as CommandFn);
    table.insert("!payday", payday::payday as CommandFn);
    table.insert("!payout", payday::payout as CommandFn);
    table.insert("!github", misc::github as CommandFn);
    table.insert("!fetch", misc::fetch as CommandFn);

    // Accepted but not implemented yet; the router must swallow these
    // without error.
    for name in [
        "!auction", "!botstat", "!draw", "!income", "!kick", "!raffle",
        "!reset", "!sentry", "!thanos", "!time",
    ] {
        table.insert(name, misc::not_implemented as CommandFn);
    }

    table
}
