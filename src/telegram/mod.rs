//! Telegram bot integration and handlers

pub mod bot;
pub mod chat;
pub mod dispatcher;
pub mod markdown;
pub mod messages;
pub mod update;

// Re-exports for convenience
pub use bot::{classify_text, create_bot, fetch_bot_username, setup_bot_commands, Command, TextKind};
pub use chat::{ChatClient, TelegramChat, TextFormat};
pub use dispatcher::{Dispatcher, ReplyAction};
pub use update::InboundUpdate;
