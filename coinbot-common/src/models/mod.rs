// File: coinbot-common/src/models/mod.rs
pub mod chatter;
pub mod command;
pub mod market;
pub mod player;
pub mod wager;

pub use chatter::ChatterSnapshot;
pub use command::ChatCommand;
pub use market::MarketState;
pub use player::Player;
pub use wager::WagerOutcome;
