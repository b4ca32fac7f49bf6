//! Renders a wager outcome into its one chat reply and one feed entry.
//! Pure; the caller owns the sending.

use coinbot_common::models::wager::WagerOutcome;

/// Which wager command produced the outcome. `AllIn` keeps the balance out
/// of the win reply; `Gacha` surfaces bet and balance on win and lose both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WagerKind {
    AllIn,
    Gacha,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeNotice {
    pub chat: String,
    pub feed: String,
}

pub fn render_wager_outcome(
    kind: WagerKind,
    username: &str,
    outcome: &WagerOutcome,
) -> OutcomeNotice {
    match (kind, outcome) {
        (WagerKind::AllIn, WagerOutcome::WinJackpot { bet, win, balance }) => OutcomeNotice {
            chat: format!(
                "ALL-IN JACKPOT!! @{} staked everything {} -> won {} coins ({}).",
                username, bet, win, balance
            ),
            feed: format!(
                "<b class=\"badge bg-primary\">{}</b> <i class=\"fas fa-coins\"></i> ALL-IN JACKPOT!!! <i class=\"fas fa-level-up-alt\"></i> +{} coins ({})",
                username, win, balance
            ),
        },
        (WagerKind::AllIn, WagerOutcome::Win { bet, win, .. }) => OutcomeNotice {
            chat: format!("@{} staked everything {} -> won {} coins", username, bet, win),
            feed: format!(
                "<b class=\"badge bg-primary\">{}</b> <i class=\"fas fa-hand-holding-usd\"></i> <i class=\"fas fa-level-up-alt\"></i> +{} coins",
                username, win
            ),
        },
        (WagerKind::AllIn, WagerOutcome::Lose { bet, .. }) => OutcomeNotice {
            chat: format!("@{} staked everything {} -> busted!", username, bet),
            feed: format!(
                "<b class=\"badge bg-danger\">{}</b> <i class=\"fas fa-user-injured\"></i> <i class=\"fas fa-level-down-alt\"></i> -{} coins",
                username, bet
            ),
        },
        (WagerKind::Gacha, WagerOutcome::WinJackpot { bet, win, balance }) => OutcomeNotice {
            chat: format!(
                "JACKPOT!! @{} wagered {} -> won {} coins ({}).",
                username, bet, win, balance
            ),
            feed: format!(
                "<b class=\"badge bg-primary\">{}</b> <i class=\"fas fa-coins\"></i> JACKPOT!!! <i class=\"fas fa-level-up-alt\"></i> +{} coins ({})",
                username, win, balance
            ),
        },
        (WagerKind::Gacha, WagerOutcome::Win { bet, win, balance }) => OutcomeNotice {
            chat: format!(
                "@{} wagered {} -> won {} coins ({}).",
                username, bet, win, balance
            ),
            feed: format!(
                "<b class=\"badge bg-primary\">{}</b> <i class=\"fas fa-hand-holding-usd\"></i> <i class=\"fas fa-level-up-alt\"></i> +{} coins ({})",
                username, win, balance
            ),
        },
        (WagerKind::Gacha, WagerOutcome::Lose { bet, balance }) => OutcomeNotice {
            chat: format!("@{} wagered {} -> busted! ({}).", username, bet, balance),
            feed: format!(
                "<b class=\"badge bg-danger\">{}</b> <i class=\"fas fa-user-injured\"></i> <i class=\"fas fa-level-down-alt\"></i> -{} coins ({})",
                username, bet, balance
            ),
        },
    }
}
