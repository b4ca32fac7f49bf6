pub mod builtin_commands;
pub mod chat_service;
pub mod command_service;
pub mod message_sender;
pub mod notifier;
pub mod overlay;
pub mod payout;
pub mod registry;

pub use chat_service::ChatBotService;
pub use command_service::{BotDeps, CommandContext, CommandService};
pub use message_sender::{ChatResponder, IrcMessageSender};
pub use notifier::{render_wager_outcome, OutcomeNotice, WagerKind};
pub use overlay::OverlayFeed;
pub use payout::{PayoutCoordinator, PayoutReceipt};
pub use registry::ParticipantRegistry;
