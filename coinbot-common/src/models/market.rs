/// The one mutable operational flag: whether the in-chat market is open.
/// Persisted through `BotConfigRepository` under the `market_state` key
/// using the same literals chat sends (`open` / `close`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketState {
    Open,
    Closed,
}

impl MarketState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketState::Open => "open",
            MarketState::Closed => "close",
        }
    }

    pub fn from_str(s: &str) -> Option<MarketState> {
        match s {
            "open" => Some(MarketState::Open),
            "close" => Some(MarketState::Closed),
            _ => None,
        }
    }
}
