use serde::{Deserialize, Serialize};

/// Result of a wager operation. Every consumer matches this exhaustively,
/// so adding a variant is a compile-checked change across the codebase.
///
/// An "insufficient balance" condition is *not* an outcome: the operation
/// fails with `Error::InsufficientCoins` before any roll happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WagerOutcome {
    WinJackpot { bet: i64, win: i64, balance: i64 },
    Win { bet: i64, win: i64, balance: i64 },
    Lose { bet: i64, balance: i64 },
}

impl WagerOutcome {
    pub fn bet(&self) -> i64 {
        match self {
            WagerOutcome::WinJackpot { bet, .. }
            | WagerOutcome::Win { bet, .. }
            | WagerOutcome::Lose { bet, .. } => *bet,
        }
    }

    pub fn balance(&self) -> i64 {
        match self {
            WagerOutcome::WinJackpot { balance, .. }
            | WagerOutcome::Win { balance, .. }
            | WagerOutcome::Lose { balance, .. } => *balance,
        }
    }
}
